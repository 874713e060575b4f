use super::*;
use crate::palette::store::PRESETS;

fn titles(ideas: &[&Idea]) -> Vec<&'static str> {
    ideas.iter().map(|i| i.title).collect()
}

#[test]
fn all_returns_every_record_in_order() {
    let catalog = IdeaCatalog;
    let got = catalog.filter(ToneFilter::All);
    assert_eq!(got.len(), 4);
    assert_eq!(
        titles(&got),
        ["Pulse Atlas", "Fragment Stories", "Echo Garden", "Signal Loom"]
    );
}

#[test]
fn each_tone_returns_only_matching_records() {
    let catalog = IdeaCatalog;
    for tone in Tone::ALL {
        let got = catalog.filter(ToneFilter::Only(tone));
        assert!(!got.is_empty());
        assert!(got.iter().all(|i| i.tone == tone));
        let expected: Vec<&Idea> = catalog.all().iter().filter(|i| i.tone == tone).collect();
        assert_eq!(got, expected);
    }
    assert_eq!(
        titles(&catalog.filter(ToneFilter::Only(Tone::Minimal))),
        ["Signal Loom"]
    );
}

#[test]
fn filter_parses_and_prints() {
    assert_eq!("all".parse::<ToneFilter>().unwrap(), ToneFilter::All);
    assert_eq!(
        " Kinetic ".parse::<ToneFilter>().unwrap(),
        ToneFilter::Only(Tone::Kinetic)
    );
    assert!("loud".parse::<ToneFilter>().is_err());
    for f in ToneFilter::choices() {
        assert_eq!(f.to_string().parse::<ToneFilter>().unwrap(), f);
    }
}

#[test]
fn labels_follow_button_order() {
    let labels: Vec<&str> = ToneFilter::choices().iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["All", "Dreamy", "Kinetic", "Playful", "Minimalist"]);
}

#[test]
fn board_defaults_to_all_and_uses_palette_accents() {
    let mut board = IdeaBoard::new();
    assert_eq!(board.selected(), ToneFilter::All);
    assert_eq!(board.visible().len(), 4);

    board.select(ToneFilter::Only(Tone::Dreamy));
    let cards = board.cards(&PRESETS[1]);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].idea.title, "Fragment Stories");
    assert_eq!(cards[0].accent, PRESETS[1].colors()[0]);
    assert_eq!(cards[0].accent_soft, PRESETS[1].colors()[1]);
}

#[test]
fn tone_filter_serde_uses_names() {
    let f: ToneFilter = serde_json::from_value(serde_json::json!("playful")).unwrap();
    assert_eq!(f, ToneFilter::Only(Tone::Playful));
    assert_eq!(
        serde_json::to_value(ToneFilter::All).unwrap(),
        serde_json::json!("all")
    );
}
