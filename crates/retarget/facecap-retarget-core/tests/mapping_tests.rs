#![allow(clippy::approx_constant)]
use facecap_retarget_core::{
    angle_to_weight, approximation_curve, weight_to_angle, CurveDensity, MappingSpec,
    ANGLE_MAX_RADIANS,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should map the domain endpoints exactly: 0 rad -> 0.0, 1.74533 rad -> 1.0
#[test]
fn endpoint_mapping_is_exact() {
    approx(angle_to_weight(0.0), 0.0, 1e-5);
    approx(angle_to_weight(ANGLE_MAX_RADIANS), 1.0, 1e-5);
    approx(weight_to_angle(0.0), 0.0, 1e-5);
    approx(weight_to_angle(1.0), ANGLE_MAX_RADIANS, 1e-4);
}

/// it should invert angle_to_weight with weight_to_angle across the domain
#[test]
fn conversion_round_trips() {
    for i in 0..=20 {
        let angle = ANGLE_MAX_RADIANS * (i as f32) / 20.0;
        approx(weight_to_angle(angle_to_weight(angle)), angle, 1e-4);
    }
}

/// it should extrapolate linearly outside the domain rather than clamping
#[test]
fn mapping_extrapolates_linearly() {
    let linear = MappingSpec::linear();
    approx(linear.evaluate(2.0 * ANGLE_MAX_RADIANS), 2.0, 1e-4);
    approx(linear.evaluate(-ANGLE_MAX_RADIANS), -1.0, 1e-4);

    let curve = MappingSpec::curve(CurveDensity::TwoPoint);
    approx(curve.evaluate(2.0 * ANGLE_MAX_RADIANS), 2.0, 1e-3);
    approx(curve.evaluate(-0.5 * ANGLE_MAX_RADIANS), -0.5, 1e-3);
}

/// it should place approximation-curve control points at the fixed domain values
#[test]
fn approximation_curve_control_points() {
    let two = approximation_curve(CurveDensity::TwoPoint);
    assert_eq!(two.len(), 2);
    approx(two[0].frame, 0.0, 1e-6);
    approx(two[1].frame, 1.74533, 1e-6);

    let three = approximation_curve(CurveDensity::ThreePoint);
    assert_eq!(three.len(), 3);
    approx(three[1].frame, 0.872665, 1e-5);
    approx(three[1].value, 0.5, 1e-5);
}

/// it should agree with the exact linear mapping at control points, and
/// closely between them
#[test]
fn curve_tracks_exact_mapping() {
    for density in [CurveDensity::TwoPoint, CurveDensity::ThreePoint] {
        let spec = MappingSpec::curve(density);
        for p in approximation_curve(density) {
            approx(spec.evaluate(p.frame), angle_to_weight(p.frame), 1e-6);
        }
        for i in 0..=40 {
            let angle = ANGLE_MAX_RADIANS * (i as f32) / 40.0;
            approx(spec.evaluate(angle), angle_to_weight(angle), 1e-3);
        }
    }
}

/// it should be monotonic non-decreasing over the domain in both forms
#[test]
fn mapping_is_monotonic() {
    for spec in [MappingSpec::linear(), MappingSpec::curve(CurveDensity::ThreePoint)] {
        let mut last = f32::NEG_INFINITY;
        for i in 0..=50 {
            let angle = ANGLE_MAX_RADIANS * (i as f32) / 50.0;
            let w = spec.evaluate(angle);
            assert!(w >= last - 1e-6, "non-monotonic at angle={angle}: {w} < {last}");
            last = w;
        }
    }
}
