use super::*;
use crate::animation::refresh::Unpaced;
use crate::encode::sink::InMemorySink;
use crate::field::sim::PARTICLE_COUNT;
use crate::ideas::catalog::Tone;
use crate::palette::store::PRESETS;

fn cfg(seed: u64) -> PlaygroundConfig {
    let mut cfg = PlaygroundConfig {
        seed: Some(seed),
        ..PlaygroundConfig::default()
    };
    cfg.surface.width = 96.0;
    cfg.surface.height = 64.0;
    cfg
}

#[test]
fn run_streams_frames_in_order() {
    let mut pg = Playground::new(&cfg(1)).unwrap();
    pg.mount().unwrap();
    let mut sink = InMemorySink::new();
    let stats = pg.run(5, &mut Unpaced, &mut sink).unwrap();

    assert_eq!(stats.frames_requested, 5);
    assert_eq!(stats.frames_rendered, 5);
    assert!(!stats.stopped_early);
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.frames), (96, 64, 5));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, [0, 1, 2, 3, 4]);
    assert!(sink.ended());
}

#[test]
fn run_without_mount_renders_nothing() {
    let mut pg = Playground::new(&cfg(2)).unwrap();
    let mut sink = InMemorySink::new();
    let stats = pg.run(3, &mut Unpaced, &mut sink).unwrap();
    assert_eq!(stats.frames_rendered, 0);
    assert!(stats.stopped_early);
    assert!(sink.frames().is_empty());
    assert!(sink.ended());
}

#[test]
fn palette_selection_propagates_to_canvas() {
    let mut pg = Playground::new(&cfg(3)).unwrap();
    pg.mount().unwrap();
    assert!(pg.select_palette(2).unwrap());
    assert_eq!(pg.palette(), PRESETS[2]);
    assert_eq!(pg.canvas().palette(), PRESETS[2]);
    assert!(
        pg.canvas()
            .particles()
            .iter()
            .all(|p| PRESETS[2].contains(p.color))
    );
    assert!(!pg.select_palette(2).unwrap());
    assert!(pg.select_palette(7).is_err());
    assert_eq!(pg.palettes().index(), 2);
}

#[test]
fn ideas_follow_filter_and_palette() {
    let mut pg = Playground::new(&cfg(4)).unwrap();
    assert_eq!(pg.ideas().len(), 4);
    pg.select_tone(ToneFilter::Only(Tone::Playful));
    pg.select_palette(1).unwrap();
    let cards = pg.ideas();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].idea.title, "Echo Garden");
    assert_eq!(cards[0].accent, PRESETS[1].colors()[0]);
}

#[test]
fn render_frame_steps_up_to_index() {
    let mut pg = Playground::new(&cfg(5)).unwrap();
    pg.mount().unwrap();
    let f = pg.render_frame(FrameIndex(3)).unwrap();
    assert_eq!((f.width, f.height), (96, 64));
    assert_eq!(
        pg.canvas().stats().draw_calls,
        4 * PARTICLE_COUNT as u64
    );
}

#[test]
fn render_frame_rejects_indices_past_the_seek_limit() {
    let mut pg = Playground::new(&cfg(9)).unwrap();
    pg.mount().unwrap();
    let err = pg.render_frame(FrameIndex(u64::MAX)).unwrap_err();
    assert!(err.to_string().contains("seek limit"));
    assert_eq!(pg.canvas().stats().frames, 0);
    assert!(pg.render_frame(FrameIndex(MAX_SEEK_FRAME + 1)).is_err());
    assert!(pg.render_frame(FrameIndex(0)).is_ok());
}

#[test]
fn render_frame_requires_a_mounted_canvas() {
    let mut pg = Playground::new(&cfg(6)).unwrap();
    assert!(pg.render_frame(FrameIndex(0)).is_err());
}

#[test]
fn detaching_the_container_stops_a_run() {
    let mut pg = Playground::new(&cfg(7)).unwrap();
    pg.mount().unwrap();
    pg.resize(None, 1.0).unwrap();
    let mut sink = InMemorySink::new();
    let stats = pg.run(4, &mut Unpaced, &mut sink).unwrap();
    assert!(stats.stopped_early);
    assert_eq!(stats.frames_rendered, 0);
}

#[test]
fn zero_surface_run_pushes_no_frames() {
    let mut c = cfg(8);
    c.surface.width = 0.0;
    c.surface.height = 0.0;
    let mut pg = Playground::new(&c).unwrap();
    pg.mount().unwrap();
    let mut sink = InMemorySink::new();
    let stats = pg.run(3, &mut Unpaced, &mut sink).unwrap();
    assert_eq!(stats.frames_rendered, 0);
    assert!(pg.canvas().particles().is_empty());
    assert_eq!(pg.canvas().stats().draw_calls, 0);
}
