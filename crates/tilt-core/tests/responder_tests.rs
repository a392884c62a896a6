// Host-side tests for the tilt responder: pointer mapping, session
// lifecycle and spring convergence.

use std::time::Duration;
use tilt_core::*;

const DESKTOP_VW: f32 = 1440.0;
const MOBILE_VW: f32 = 390.0;

fn frame() -> Duration {
    Duration::from_secs_f64(1.0 / 60.0)
}

fn square() -> SurfaceRect {
    SurfaceRect::new(0.0, 0.0, 300.0, 300.0)
}

fn desktop(x: f32, y: f32) -> PointerSample {
    PointerSample::new(x, y, DESKTOP_VW)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn run(r: &mut TiltResponder, ticks: usize) -> TiltState {
    let mut s = r.state();
    for _ in 0..ticks {
        s = r.tick(frame());
    }
    s
}

#[test]
fn pointer_right_of_center_tilts_about_vertical_axis() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::new(&cfg).unwrap();
    let d = r
        .on_pointer_move(desktop(225.0, 150.0), square(), &cfg)
        .unwrap();
    assert_eq!(d.offset, glam::Vec2::new(75.0, 0.0));
    assert!(approx(d.rotate_y_target, 6.0), "got {}", d.rotate_y_target);
    assert!(approx(d.rotate_x_target, 0.0), "got {}", d.rotate_x_target);
}

#[test]
fn pointer_at_center_has_no_tilt() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    let d = r
        .on_pointer_move(desktop(150.0, 150.0), square(), &cfg)
        .unwrap();
    assert_eq!(d.rotate_x_target, 0.0);
    assert_eq!(d.rotate_y_target, 0.0);
}

#[test]
fn pointer_above_center_tilts_about_horizontal_axis() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    let d = r
        .on_pointer_move(desktop(150.0, 0.0), square(), &cfg)
        .unwrap();
    assert!(approx(d.rotate_x_target, 12.0), "got {}", d.rotate_x_target);
    let d = r
        .on_pointer_move(desktop(150.0, 300.0), square(), &cfg)
        .unwrap();
    assert!(approx(d.rotate_x_target, -12.0), "got {}", d.rotate_x_target);
}

#[test]
fn rotation_targets_stay_within_amplitude_inside_surface() {
    let cfg = TiltConfig::default();
    let rect = SurfaceRect::new(40.0, 120.0, 320.0, 180.0);
    for (vw, factor) in [(DESKTOP_VW, 1.0), (MOBILE_VW, 0.6)] {
        let bound = cfg.rotate_amplitude * factor + 1e-4;
        let mut r = TiltResponder::default();
        for i in 0..=16 {
            for j in 0..=16 {
                let x = rect.left + rect.width * i as f32 / 16.0;
                let y = rect.top + rect.height * j as f32 / 16.0;
                assert!(rect.contains(glam::Vec2::new(x, y)));
                let d = r
                    .on_pointer_move(PointerSample::new(x, y, vw), rect, &cfg)
                    .unwrap();
                assert!(d.rotate_x_target.abs() <= bound, "x={x} y={y} vw={vw}");
                assert!(d.rotate_y_target.abs() <= bound, "x={x} y={y} vw={vw}");
            }
        }
    }
}

#[test]
fn translate_is_raw_offset_from_top_left() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    let rect = SurfaceRect::new(100.0, 50.0, 300.0, 300.0);
    let d = r
        .on_pointer_move(desktop(225.0, 150.0), rect, &cfg)
        .unwrap();
    assert_eq!(d.translate, glam::Vec2::new(125.0, 100.0));
    // unsmoothed: visible before any tick
    assert_eq!(r.state().translate, glam::Vec2::new(125.0, 100.0));
}

#[test]
fn vertical_velocity_drives_caption_flutter() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    let first = r
        .on_pointer_move(desktop(150.0, 75.0), square(), &cfg)
        .unwrap();
    assert!(approx(first.offset.y, -75.0));
    let second = r
        .on_pointer_move(desktop(150.0, 115.0), square(), &cfg)
        .unwrap();
    assert!(approx(second.offset.y, -35.0));
    assert!(approx(second.velocity_y, 40.0), "got {}", second.velocity_y);
    assert!(
        approx(second.caption_rotate_target, -24.0),
        "got {}",
        second.caption_rotate_target
    );
}

#[test]
fn move_sets_targets_without_moving_values() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_enter(&cfg);
    r.on_pointer_move(desktop(225.0, 150.0), square(), &cfg);
    assert_eq!(r.state().rotate_y, 0.0);
    assert!(approx(r.targets().rotate_y, 6.0));

    let s = r.tick(frame());
    assert!(s.rotate_y > 0.0 && s.rotate_y < 6.0, "got {}", s.rotate_y);
    let s = run(&mut r, 240);
    assert!(approx(s.rotate_y, 6.0), "got {}", s.rotate_y);
    assert!(approx(s.scale, 1.1), "got {}", s.scale);
    assert!(approx(s.opacity, 1.0), "got {}", s.opacity);
}

#[test]
fn single_frame_is_one_integration_step() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_move(desktop(225.0, 150.0), square(), &cfg);

    let mut reference = Spring::new(0.0, SpringConstants::SURFACE);
    reference.set_target(6.0);
    reference.advance(frame().as_secs_f32());

    assert!(approx(r.tick(frame()).rotate_y, reference.value));
}

#[test]
fn leave_converges_to_rest_without_oscillating() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_enter(&cfg);
    r.on_pointer_move(desktop(300.0, 0.0), square(), &cfg);
    r.on_pointer_move(desktop(300.0, 0.0), square(), &cfg);
    let start = run(&mut r, 180);
    assert!(start.rotate_y > 11.0);

    r.on_pointer_leave();
    let mut last = start;
    for _ in 0..90 {
        last = r.tick(frame());
        assert!(last.rotate_y >= -1e-3, "rotate_y overshot: {}", last.rotate_y);
        assert!(last.rotate_x >= -1e-3, "rotate_x overshot: {}", last.rotate_x);
    }
    assert!(last.rotate_y.abs() < 0.01 * start.rotate_y.abs());
    assert!(last.rotate_x.abs() < 0.01 * start.rotate_x.abs());
    assert!((last.scale - 1.0).abs() < 0.01 * (start.scale - 1.0).abs());
    assert!(last.opacity < 0.01 * start.opacity);
    assert!(last.caption_rotate.abs() < 0.01);

    run(&mut r, 300);
    assert!(r.is_at_rest());
}

#[test]
fn caption_flutter_decays_after_motion_stops() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_enter(&cfg);
    r.on_pointer_move(desktop(150.0, 100.0), square(), &cfg);
    r.on_pointer_move(desktop(150.0, 160.0), square(), &cfg);
    let peak = run(&mut r, 10).caption_rotate;
    assert!(peak < -1.0, "expected a swing, got {peak}");
    r.on_pointer_leave();
    let s = run(&mut r, 90);
    assert!(s.caption_rotate.abs() < 0.01 * peak.abs());
}

#[test]
fn double_leave_matches_single_leave() {
    let cfg = TiltConfig::default();
    let mut a = TiltResponder::default();
    a.on_pointer_enter(&cfg);
    a.on_pointer_move(desktop(40.0, 260.0), square(), &cfg);
    run(&mut a, 20);
    let mut b = a.clone();

    a.on_pointer_leave();
    b.on_pointer_leave();
    b.on_pointer_leave();
    assert_eq!(a, b);
    for _ in 0..60 {
        assert_eq!(a.tick(frame()), b.tick(frame()));
    }
}

#[test]
fn zero_size_surface_is_ignored() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_enter(&cfg);
    r.on_pointer_move(desktop(200.0, 90.0), square(), &cfg);
    run(&mut r, 5);
    let before = r.clone();

    for rect in [
        SurfaceRect::new(0.0, 0.0, 0.0, 300.0),
        SurfaceRect::new(0.0, 0.0, 300.0, 0.0),
        SurfaceRect::default(),
        SurfaceRect::new(0.0, 0.0, f32::NAN, 300.0),
    ] {
        assert!(r.on_pointer_move(desktop(10.0, 10.0), rect, &cfg).is_none());
        assert_eq!(r, before);
    }
}

#[test]
fn mobile_factor_scales_rotation_only() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_enter(&cfg);
    assert!(approx(r.targets().scale, cfg.scale_on_hover));

    let d = r
        .on_pointer_move(PointerSample::new(225.0, 150.0, MOBILE_VW), square(), &cfg)
        .unwrap();
    assert!(approx(d.rotate_y_target, 3.6), "got {}", d.rotate_y_target);

    let d = r
        .on_pointer_move(PointerSample::new(225.0, 190.0, MOBILE_VW), square(), &cfg)
        .unwrap();
    assert!(approx(d.caption_rotate_target, -24.0), "got {}", d.caption_rotate_target);
}

#[test]
fn leave_forgets_vertical_baseline() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_enter(&cfg);
    r.on_pointer_move(desktop(150.0, 75.0), square(), &cfg);
    r.on_pointer_leave();

    r.on_pointer_enter(&cfg);
    let d = r
        .on_pointer_move(desktop(150.0, 75.0), square(), &cfg)
        .unwrap();
    assert!(approx(d.velocity_y, -75.0), "got {}", d.velocity_y);
}

#[test]
fn long_frame_stays_bounded() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_enter(&cfg);
    r.on_pointer_move(desktop(225.0, 150.0), square(), &cfg);
    for _ in 0..20 {
        let s = r.tick(Duration::from_secs(5));
        assert!(s.rotate_y.is_finite());
        assert!(s.rotate_y <= 6.0 + 1e-3, "got {}", s.rotate_y);
        assert!(s.scale <= 1.1 + 1e-3, "got {}", s.scale);
    }
}

#[test]
fn zero_dt_changes_nothing() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    r.on_pointer_enter(&cfg);
    let before = r.clone();
    r.tick(Duration::ZERO);
    assert_eq!(r, before);
}

#[test]
fn rest_tracking_follows_session() {
    let cfg = TiltConfig::default();
    let mut r = TiltResponder::default();
    assert!(r.is_at_rest());
    r.on_pointer_enter(&cfg);
    assert!(r.is_hovering());
    assert!(!r.is_at_rest());
    r.on_pointer_leave();
    assert!(!r.is_hovering());
    assert!(r.is_at_rest(), "targets already at rest values");
}

#[test]
fn custom_springs_are_used_per_filter() {
    let mut cfg = TiltConfig::default();
    cfg.springs.caption = SpringConstants {
        stiffness: 0.0,
        damping: 0.0,
        mass: 1.0,
    };
    let mut r = TiltResponder::new(&cfg).unwrap();
    r.on_pointer_move(desktop(150.0, 75.0), square(), &cfg);
    let s = run(&mut r, 30);
    // a spring with no stiffness never leaves its start
    assert_eq!(s.caption_rotate, 0.0);
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = TiltConfig::default();
    cfg.springs.rotation.mass = -1.0;
    assert!(TiltResponder::new(&cfg).is_err());
}
