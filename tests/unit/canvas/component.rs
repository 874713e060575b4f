use super::*;
use crate::canvas::host::FixedHost;
use crate::field::sim::PARTICLE_COUNT;
use crate::foundation::core::Size;
use crate::palette::store::PRESETS;
use crate::render::backend::{BackendKind, RenderSettings, create_backend};

fn canvas(seed: u64) -> GenerativeCanvas {
    let backend = create_backend(BackendKind::Cpu, &RenderSettings::default()).unwrap();
    GenerativeCanvas::new(PRESETS[0], backend, Some(seed))
}

#[test]
fn mount_seeds_and_starts_the_loop() {
    let host = FixedHost::new(120.0, 80.0, 1.0);
    let mut c = canvas(1);
    assert!(!c.is_running());
    c.mount(&host).unwrap();
    assert!(c.is_mounted());
    assert!(c.is_running());
    assert_eq!(c.particles().len(), PARTICLE_COUNT);
    assert_eq!(c.step(&host).unwrap(), StepOutcome::Rendered(FrameIndex(0)));
    assert_eq!(c.step(&host).unwrap(), StepOutcome::Rendered(FrameIndex(1)));
    assert_eq!(c.stats().draw_calls, 2 * PARTICLE_COUNT as u64);
    let frame = c.frame().unwrap();
    assert_eq!((frame.width, frame.height), (120, 80));
    assert!(!frame.is_blank());
}

#[test]
fn detached_host_is_a_silent_noop() {
    let host = FixedHost::detached();
    let mut c = canvas(2);
    c.mount(&host).unwrap();
    assert!(!c.is_mounted());
    assert!(c.particles().is_empty());
    assert_eq!(c.step(&host).unwrap(), StepOutcome::Idle);
    assert_eq!(c.stats().draw_calls, 0);
    assert!(c.frame().is_none());
}

#[test]
fn zero_sized_container_creates_nothing_and_draws_nothing() {
    let host = FixedHost::new(0.0, 0.0, 2.0);
    let mut c = canvas(3);
    c.mount(&host).unwrap();
    assert!(c.particles().is_empty());
    for _ in 0..5 {
        c.step(&host).unwrap();
    }
    assert_eq!(c.stats().draw_calls, 0);
    assert_eq!(c.stats().frames, 0);
    assert!(c.frame().is_none());
}

#[test]
fn losing_the_container_stops_the_loop() {
    let mut host = FixedHost::new(64.0, 64.0, 1.0);
    let mut c = canvas(4);
    c.mount(&host).unwrap();
    c.step(&host).unwrap();
    host.set_container(None);
    assert_eq!(c.step(&host).unwrap(), StepOutcome::Stopped);
    assert!(!c.is_running());
    assert_eq!(c.step(&host).unwrap(), StepOutcome::Idle);
}

#[test]
fn palette_change_reseeds_and_restarts() {
    let host = FixedHost::new(200.0, 150.0, 1.0);
    let mut c = canvas(5);
    c.mount(&host).unwrap();
    c.step(&host).unwrap();
    let before = c.particles().to_vec();

    assert!(c.set_palette(PRESETS[3]));
    assert!(c.is_running());
    assert_eq!(c.palette(), PRESETS[3]);
    assert_eq!(c.particles().len(), PARTICLE_COUNT);
    let kept = before
        .iter()
        .zip(c.particles())
        .filter(|(old, new)| old.pos == new.pos && old.radius == new.radius)
        .count();
    assert_eq!(kept, 0);
    assert!(c.particles().iter().all(|p| PRESETS[3].contains(p.color)));
    assert!(c.frame().unwrap().is_blank());

    assert!(!c.set_palette(PRESETS[3]));
    assert!(matches!(c.step(&host).unwrap(), StepOutcome::Rendered(_)));
    assert!(!c.frame().unwrap().is_blank());
}

#[test]
fn palette_change_seeds_inside_the_resized_bounds() {
    let mut host = FixedHost::new(400.0, 400.0, 1.0);
    let mut c = canvas(9);
    c.mount(&host).unwrap();
    host.set_container(Some(Size::new(30.0, 20.0)));
    c.handle_resize(&host).unwrap();

    c.set_palette(PRESETS[2]);
    assert!(
        c.particles()
            .iter()
            .all(|p| p.pos.x < 30.0 && p.pos.y < 20.0)
    );
}

#[test]
fn palette_change_while_unmounted_does_not_start_the_loop() {
    let mut c = canvas(6);
    assert!(c.set_palette(PRESETS[1]));
    assert!(!c.is_running());
    assert!(c.particles().is_empty());

    let host = FixedHost::new(64.0, 64.0, 1.0);
    c.mount(&host).unwrap();
    c.unmount();
    assert!(c.set_palette(PRESETS[2]));
    assert!(!c.is_running());
    assert!(c.particles().is_empty());
}

#[test]
fn resize_keeps_particles_and_clears_buffer() {
    let mut host = FixedHost::new(100.0, 100.0, 1.0);
    let mut c = canvas(7);
    c.mount(&host).unwrap();
    c.step(&host).unwrap();
    let before = c.particles().to_vec();

    host.set_container(Some(Size::new(50.0, 40.0)));
    host.set_device_pixel_ratio(2.0);
    c.handle_resize(&host).unwrap();

    assert_eq!(c.particles(), before.as_slice());
    let frame = c.frame().unwrap();
    assert_eq!((frame.width, frame.height), (100, 80));
    assert!(frame.is_blank());
}

#[test]
fn unmount_cancels_and_drops_particles() {
    let host = FixedHost::new(64.0, 64.0, 1.0);
    let mut c = canvas(8);
    c.mount(&host).unwrap();
    c.unmount();
    assert!(!c.is_running());
    assert!(c.particles().is_empty());
    assert_eq!(c.step(&host).unwrap(), StepOutcome::Idle);

    c.mount(&host).unwrap();
    assert!(c.is_running());
    assert_eq!(c.particles().len(), PARTICLE_COUNT);
}

#[test]
fn same_seed_gives_same_frames() {
    let host = FixedHost::new(48.0, 48.0, 1.0);
    let mut a = canvas(99);
    let mut b = canvas(99);
    a.mount(&host).unwrap();
    b.mount(&host).unwrap();
    for _ in 0..3 {
        a.step(&host).unwrap();
        b.step(&host).unwrap();
    }
    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.frame(), b.frame());
}
