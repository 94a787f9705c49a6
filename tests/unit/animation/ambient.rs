use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn scale_key(at_ms: u64, scale: f64) -> StyleKey {
    StyleKey {
        at_ms,
        value: StyleSet::default().with_scale(scale),
        ease: Ease::Linear,
    }
}

fn ripple_spec() -> AmbientSpec {
    AmbientSpec {
        keys: vec![
            StyleKey {
                at_ms: 0,
                value: StyleSet::default().with_opacity(0.3).with_scale(0.8),
                ease: Ease::Linear,
            },
            StyleKey {
                at_ms: 1500,
                value: StyleSet::default().with_opacity(0.0).with_scale(1.5),
                ease: Ease::Linear,
            },
        ],
        period_ms: 1500,
        mode: LoopMode::Repeat,
        repeat_delay_ms: 1000,
        start_delay_ms: 0,
    }
}

#[test]
fn validate_rejects_malformed_specs() {
    let mut spec = ripple_spec();
    spec.period_ms = 0;
    assert!(spec.validate().is_err());

    let mut spec = ripple_spec();
    spec.keys.clear();
    assert!(spec.validate().is_err());

    let mut spec = ripple_spec();
    spec.keys.swap(0, 1);
    assert!(spec.validate().is_err());

    let mut spec = ripple_spec();
    spec.keys[1].at_ms = 9000;
    assert!(spec.validate().is_err());

    assert!(ripple_spec().validate().is_ok());
}

#[test]
fn repeat_interpolates_holds_and_restarts() {
    let ambient = Ambient::started(ripple_spec(), TimeMs(0));

    let start = ambient.sample(TimeMs(0));
    assert_eq!(start.opacity, 0.3);
    assert_eq!(start.scale, 0.8);

    let mid = ambient.sample(TimeMs(750));
    assert!(close(mid.opacity, 0.15));
    assert!(close(mid.scale, 1.15));

    // Inside the repeat-delay gap the cycle endpoint holds.
    let gap = ambient.sample(TimeMs(2000));
    assert_eq!(gap.opacity, 0.0);
    assert_eq!(gap.scale, 1.5);

    // Next cycle restarts from the first waypoint.
    let next = ambient.sample(TimeMs(2500));
    assert_eq!(next.opacity, 0.3);
    assert_eq!(next.scale, 0.8);
}

#[test]
fn pingpong_reflects_alternate_cycles() {
    let spec = AmbientSpec {
        keys: vec![scale_key(0, 1.0), scale_key(1000, 1.05)],
        period_ms: 1000,
        mode: LoopMode::PingPong,
        repeat_delay_ms: 0,
        start_delay_ms: 0,
    };
    let ambient = Ambient::started(spec, TimeMs(0));

    assert!(close(ambient.sample(TimeMs(500)).scale, 1.025));
    // Cycle boundary lands on the far waypoint, then comes back.
    assert_eq!(ambient.sample(TimeMs(1000)).scale, 1.05);
    assert!(close(ambient.sample(TimeMs(1500)).scale, 1.025));
    assert_eq!(ambient.sample(TimeMs(2000)).scale, 1.0);
}

#[test]
fn start_delay_holds_first_waypoint() {
    let spec = AmbientSpec {
        keys: vec![scale_key(0, 1.0), scale_key(1000, 2.0)],
        period_ms: 1000,
        mode: LoopMode::Repeat,
        repeat_delay_ms: 0,
        start_delay_ms: 500,
    };
    let ambient = Ambient::started(spec, TimeMs(100));

    assert_eq!(ambient.sample(TimeMs(0)).scale, 1.0);
    assert_eq!(ambient.sample(TimeMs(599)).scale, 1.0);
    assert!(close(ambient.sample(TimeMs(1100)).scale, 1.5));
}

#[test]
fn multi_waypoint_track_sweeps_in_order() {
    // The original skill-badge pop: scale 0 -> 1.2 -> 1.0.
    let spec = AmbientSpec {
        keys: vec![scale_key(0, 0.0), scale_key(400, 1.2), scale_key(800, 1.0)],
        period_ms: 800,
        mode: LoopMode::Repeat,
        repeat_delay_ms: 0,
        start_delay_ms: 0,
    };
    let ambient = Ambient::started(spec, TimeMs(0));

    assert!(close(ambient.sample(TimeMs(200)).scale, 0.6));
    assert!(close(ambient.sample(TimeMs(600)).scale, 1.1));
}
