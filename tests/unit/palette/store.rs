use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn selecting_each_index_sets_that_preset_exactly() {
    let mut store = PaletteStore::new();
    for (i, preset) in PRESETS.iter().enumerate() {
        store.select(i).unwrap();
        assert_eq!(store.index(), i);
        assert_eq!(store.current(), *preset);
    }
}

#[test]
fn select_reports_change() {
    let mut store = PaletteStore::new();
    assert!(!store.select(0).unwrap());
    assert!(store.select(2).unwrap());
    assert!(!store.select(2).unwrap());
}

#[test]
fn out_of_range_is_rejected_and_keeps_selection() {
    let mut store = PaletteStore::with_index(1).unwrap();
    let err = store.select(4).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert_eq!(store.index(), 1);
    assert!(PaletteStore::with_index(9).is_err());
}

#[test]
fn presets_have_four_colors_matching_hex_sources() {
    assert_eq!(PRESETS.len(), 4);
    let hex: Vec<String> = PRESETS[2].colors().iter().map(|c| c.to_hex()).collect();
    assert_eq!(hex, ["#202020", "#F46036", "#2E294E", "#1B998B"]);
}

#[test]
fn random_color_stays_in_palette() {
    let mut rng = StdRng::seed_from_u64(3);
    let palette = PRESETS[3];
    for _ in 0..200 {
        assert!(palette.contains(palette.random_color(&mut rng)));
    }
}

#[test]
fn palette_serializes_as_hex_array() {
    let v = serde_json::to_value(PRESETS[0]).unwrap();
    assert_eq!(v, serde_json::json!(["#0E0B16", "#4717F6", "#A239CA", "#FFFDFF"]));
}
