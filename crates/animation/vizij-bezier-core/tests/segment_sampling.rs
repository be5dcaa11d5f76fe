use std::sync::Arc;
use std::thread;

use vizij_bezier_core::{
    control_point_sets, sample_segment, Components, Config, ControlPoint, Handle, Interpolator,
    Keyframe, Segment, TimeDomain, Value, ValueShape,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// start=(0,10), end=(2,20), handles resolving to (0.5,12) and (1.5,18).
fn scalar_ease() -> Segment {
    Segment::new(Keyframe::new(0.0, 10.0f32), Keyframe::new(2.0, 20.0f32))
        .with_handles(Handle::new(0.5f32, 2.0f32), Handle::new(-0.5f32, -2.0f32))
}

fn vec3_per_dimension() -> Segment {
    Segment::new(
        Keyframe::new(1.0, Value::Vec3([0.0, 0.0, 0.0])),
        Keyframe::new(3.0, Value::Vec3([1.0, 2.0, -4.0])),
    )
    .with_handles(
        Handle::new(Value::Vec3([0.2, 1.0, 0.6]), Value::Vec3([0.0, 0.0, 0.0])),
        Handle::new(Value::Vec3([-0.2, -1.0, -0.6]), Value::Vec3([0.0, 0.0, 0.0])),
    )
}

fn scalar_of(v: &Value) -> f32 {
    match v {
        Value::Float(f) => *f,
        other => panic!("expected Float, got {other:?}"),
    }
}

#[test]
fn scalar_keyframe_scenario_hits_both_keys() {
    let seg = scalar_ease();
    let interp = Interpolator::default();
    assert_eq!(interp.value_at_time(&seg, 0.0), Value::Float(10.0));
    assert_eq!(interp.value_at_time(&seg, 2.0), Value::Float(20.0));
    approx(scalar_of(&interp.value_at_time(&seg, 1.0)), 15.0, 0.02);
}

#[test]
fn scalar_keyframe_scenario_without_exact_anchors_is_within_tolerance() {
    let seg = scalar_ease();
    let interp = Interpolator::new(Config {
        exact_anchors: false,
        ..Config::default()
    });
    approx(scalar_of(&interp.value_at_time(&seg, 0.0)), 10.0, 0.01);
    approx(scalar_of(&interp.value_at_time(&seg, 2.0)), 20.0, 0.01);
}

#[test]
fn scalar_segment_resolves_absolute_handles() {
    let sets = control_point_sets(&scalar_ease());
    assert_eq!(sets.len(), 1);
    assert_eq!(
        sets[0],
        [
            ControlPoint::new(0.0, 10.0),
            ControlPoint::new(0.5, 12.0),
            ControlPoint::new(1.5, 18.0),
            ControlPoint::new(2.0, 20.0),
        ]
    );
}

#[test]
fn normalized_domain_maps_unit_interval_onto_segment() {
    let seg = scalar_ease();
    let local = Interpolator::default();
    let normalized = Interpolator::new(Config {
        time_domain: TimeDomain::Normalized,
        ..Config::default()
    });
    assert_eq!(normalized.value_at_time(&seg, 0.0), Value::Float(10.0));
    assert_eq!(normalized.value_at_time(&seg, 1.0), Value::Float(20.0));
    assert_eq!(
        normalized.value_at_time(&seg, 0.25),
        local.value_at_time(&seg, 0.5)
    );
    assert_eq!(
        local.value_at_normalized(&seg, 0.75),
        local.value_at_time(&seg, 1.5)
    );
}

#[test]
fn scalar_and_one_dimensional_vector_agree() {
    let scalar = scalar_ease();
    let vector = Segment::new(
        Keyframe::new(0.0, Value::Vector(vec![10.0])),
        Keyframe::new(2.0, Value::Vector(vec![20.0])),
    )
    .with_handles(
        Handle::new(Value::Vector(vec![0.5]), Value::Vector(vec![2.0])),
        Handle::new(Value::Vector(vec![-0.5]), Value::Vector(vec![-2.0])),
    );
    assert_eq!(vector.start.value.shape(), ValueShape::Vector(1));

    for i in 0..=16 {
        let t = i as f32 / 8.0;
        let s = scalar_of(&sample_segment(&scalar, t));
        match sample_segment(&vector, t) {
            Value::Vector(v) => assert_eq!(v, vec![s], "t={t}"),
            other => panic!("expected Vector, got {other:?}"),
        }
    }
}

#[test]
fn dimensions_are_independent() {
    let seg = vec3_per_dimension();
    let starts = [0.0f32, 0.0, 0.0];
    let ends = [1.0f32, 2.0, -4.0];
    let reach = [0.2f32, 1.0, 0.6];

    for t in [1.0f32, 1.3, 1.5, 2.2, 2.9, 3.0] {
        let combined = match sample_segment(&seg, t) {
            Value::Vec3(v) => v,
            other => panic!("expected Vec3, got {other:?}"),
        };
        for d in 0..3 {
            let alone = Segment::new(Keyframe::new(1.0, starts[d]), Keyframe::new(3.0, ends[d]))
                .with_handles(
                    Handle::new(reach[d], 0.0f32),
                    Handle::new(-reach[d], 0.0f32),
                );
            assert_eq!(
                combined[d],
                scalar_of(&sample_segment(&alone, t)),
                "t={t} d={d}"
            );
        }
    }
}

#[test]
fn handle_times_are_resolved_per_dimension() {
    let sets = control_point_sets(&vec3_per_dimension());
    assert_eq!(sets.len(), 3);
    approx(sets[0][1].x, 1.2, 1e-6);
    approx(sets[1][1].x, 2.0, 1e-6);
    approx(sets[2][2].x, 2.4, 1e-6);
    // Key times are shared.
    for set in &sets {
        assert_eq!(set[0].x, 1.0);
        assert_eq!(set[3].x, 3.0);
    }

    // Same values, different reach: progress differs per dimension.
    let v = match Interpolator::default().value_at_time(&vec3_per_dimension(), 1.5) {
        Value::Vec3(v) => v,
        other => panic!("expected Vec3, got {other:?}"),
    };
    let progress = [v[0] / 1.0, v[1] / 2.0, v[2] / -4.0];
    approx(progress[0], 0.225, 0.01);
    approx(progress[1], 0.106, 0.01);
    approx(progress[2], 0.167, 0.01);
}

#[test]
fn missing_handles_use_default_ease() {
    let seg = Segment::new(
        Keyframe::new(0.0, Value::ColorRgba([0.0, 0.0, 0.0, 1.0])),
        Keyframe::new(4.0, Value::ColorRgba([1.0, 0.5, 0.25, 0.5])),
    );
    let sets = control_point_sets(&seg);
    approx(sets[0][1].x, 1.68, 1e-5);
    approx(sets[0][2].x, 2.32, 1e-5);
    assert_eq!(sets[3][1].y, 1.0);
    assert_eq!(sets[3][2].y, 0.5);

    match Interpolator::default().value_at_time(&seg, 1.0) {
        Value::ColorRgba(c) => {
            approx(c[0], 0.129, 0.005);
            approx(c[1], 0.129 * 0.5, 0.005);
            approx(c[2], 0.129 * 0.25, 0.005);
            approx(c[3], 0.935, 0.005);
        }
        other => panic!("expected ColorRgba, got {other:?}"),
    }
}

#[test]
fn fixed_size_arrays_are_segment_values() {
    use vizij_bezier_core::SegmentSource;

    struct Pair;
    impl SegmentSource for Pair {
        type Value = [f32; 2];
        fn start_key(&self) -> (f32, [f32; 2]) {
            (0.0, [0.0, 5.0])
        }
        fn end_key(&self) -> (f32, [f32; 2]) {
            (1.0, [1.0, 5.0])
        }
        fn start_handle_absolute(&self) -> ([f32; 2], [f32; 2]) {
            ([0.333, 0.333], [0.333, 5.0])
        }
        fn end_handle_absolute(&self) -> ([f32; 2], [f32; 2]) {
            ([0.667, 0.667], [0.667, 5.0])
        }
    }

    let out = Interpolator::default().value_at_time(&Pair, 0.5);
    approx(out[0], 0.5, 2e-3);
    approx(out[1], 5.0, 1e-5);
}

#[test]
fn slope_matches_linear_rate() {
    let seg = Segment::new(Keyframe::new(0.0, 0.0f32), Keyframe::new(3.0, 6.0f32))
        .with_handles(Handle::new(1.0f32, 2.0f32), Handle::new(-1.0f32, -2.0f32));
    let slope = Interpolator::default().slope_at_time(&seg, 1.2);
    approx(scalar_of(&slope), 2.0, 1e-3);
}

#[test]
fn sampling_is_shareable_across_threads() {
    let seg = Arc::new(vec3_per_dimension());
    let interp = Arc::new(Interpolator::default());
    let expected = interp.value_at_time(&*seg, 2.2);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let seg = Arc::clone(&seg);
            let interp = Arc::clone(&interp);
            thread::spawn(move || interp.value_at_time(&*seg, 2.2))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().expect("sampler thread"), expected);
    }
}

#[test]
fn end_anchor_keeps_start_key_kind() {
    let seg = Segment::new(
        Keyframe::new(0.0, Value::Vec3([0.0, 0.0, 0.0])),
        Keyframe::new(1.0, Value::Vector(vec![1.0, 2.0, 3.0])),
    );
    let interp = Interpolator::default();
    assert_eq!(interp.value_at_time(&seg, 1.0), Value::Vec3([1.0, 2.0, 3.0]));
    assert!(matches!(interp.value_at_time(&seg, 0.5), Value::Vec3(_)));
}
