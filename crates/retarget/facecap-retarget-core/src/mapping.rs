//! Unit mapping between bone rotation angles and normalized blend weights.
//!
//! The capture format encodes each weight as a bone rotation between 0 and
//! 100 degrees. The conversion constants below are part of the wire
//! contract with the upstream exporter and are reproduced exactly.

use serde::{Deserialize, Serialize};

use crate::curve::{HandleStyle, Interpolation, KeyframePoint, Vec2};

/// Upper end of the angle domain: 100 degrees in radians.
pub const ANGLE_MAX_RADIANS: f32 = 1.74533;

/// (180 / pi) / 100 — radians to normalized weight.
#[allow(clippy::excessive_precision)]
pub const RADIANS_TO_WEIGHT: f32 = 0.5729578137397766;

/// pi / 180 — degrees to radians, at the exporter's precision.
#[allow(clippy::excessive_precision)]
pub const DEGREES_TO_RADIANS: f32 = 0.01745329251;

/// Frame-axis half-span of generated tangent handles.
const HANDLE_SPAN: f32 = 0.333;

/// Convert a rotation angle (radians, [0, ANGLE_MAX_RADIANS]) to a
/// normalized weight. Values outside the domain extrapolate linearly.
#[inline]
pub fn angle_to_weight(angle_radians: f32) -> f32 {
    angle_radians * RADIANS_TO_WEIGHT
}

/// Exact inverse of [`angle_to_weight`].
#[inline]
pub fn weight_to_angle(weight: f32) -> f32 {
    weight * 100.0 * DEGREES_TO_RADIANS
}

/// How many control points the hand-tunable approximation curve carries.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum CurveDensity {
    #[default]
    TwoPoint,
    ThreePoint,
}

/// Build the keyframed approximation of the linear unit mapping.
///
/// Control points sit at fixed domain values and carry the exact
/// [`angle_to_weight`] codomain value. Handles are symmetric vector
/// handles with deltas proportional to the local slope, so the
/// interpolated curve tracks the exact line while staying editable.
pub fn approximation_curve(density: CurveDensity) -> Vec<KeyframePoint> {
    let domain: &[f32] = match density {
        CurveDensity::TwoPoint => &[0.0, ANGLE_MAX_RADIANS],
        CurveDensity::ThreePoint => &[0.0, ANGLE_MAX_RADIANS * 0.5, ANGLE_MAX_RADIANS],
    };
    domain
        .iter()
        .map(|&angle| KeyframePoint {
            frame: angle,
            value: angle_to_weight(angle),
            handle_left: Vec2::new(-HANDLE_SPAN, -HANDLE_SPAN * RADIANS_TO_WEIGHT),
            handle_right: Vec2::new(HANDLE_SPAN, HANDLE_SPAN * RADIANS_TO_WEIGHT),
            handle_style: HandleStyle::Vector,
            interpolation: Interpolation::Bezier,
        })
        .collect()
}

/// The angle-to-weight mapping attached to a driver: either the closed-form
/// linear coefficient or the keyframed curve approximating the same line.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum MappingSpec {
    Linear { scale: f32 },
    Curve { points: Vec<KeyframePoint> },
}

impl MappingSpec {
    /// The default linear mapping (exact wire coefficient).
    pub fn linear() -> Self {
        MappingSpec::Linear {
            scale: RADIANS_TO_WEIGHT,
        }
    }

    /// The keyframed mapping at the requested density.
    pub fn curve(density: CurveDensity) -> Self {
        MappingSpec::Curve {
            points: approximation_curve(density),
        }
    }

    /// Evaluate the mapping at an angle (radians). Outside the keyed
    /// domain the curve form extrapolates linearly, matching driver
    /// extrapolation semantics.
    pub fn evaluate(&self, angle: f32) -> f32 {
        match self {
            MappingSpec::Linear { scale } => angle * scale,
            MappingSpec::Curve { points } => evaluate_curve(points, angle),
        }
    }
}

impl Default for MappingSpec {
    fn default() -> Self {
        Self::linear()
    }
}

fn evaluate_curve(points: &[KeyframePoint], x: f32) -> f32 {
    match points.len() {
        0 => 0.0,
        1 => points[0].value,
        _ => {
            let first = &points[0];
            let last = &points[points.len() - 1];
            if x <= first.frame {
                return extrapolate(first, first.handle_right, x);
            }
            if x >= last.frame {
                return extrapolate(last, last.handle_left, x);
            }
            for pair in points.windows(2) {
                let (left, right) = (&pair[0], &pair[1]);
                if x >= left.frame && x <= right.frame {
                    return match left.interpolation {
                        Interpolation::Constant => left.value,
                        Interpolation::Linear => {
                            let denom = (right.frame - left.frame).max(f32::EPSILON);
                            let t = (x - left.frame) / denom;
                            left.value + (right.value - left.value) * t
                        }
                        Interpolation::Bezier => bezier_segment(left, right, x),
                    };
                }
            }
            last.value
        }
    }
}

/// Linear extrapolation along the tangent handle at an endpoint.
fn extrapolate(point: &KeyframePoint, handle: Vec2, x: f32) -> f32 {
    if handle.x.abs() <= f32::EPSILON {
        return point.value;
    }
    point.value + (x - point.frame) * (handle.y / handle.x)
}

#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Evaluate one bezier segment at frame x by inverting the frame-axis
/// bezier with bisection, then evaluating the value-axis bezier.
fn bezier_segment(left: &KeyframePoint, right: &KeyframePoint, x: f32) -> f32 {
    let x0 = left.frame;
    let x1 = left.frame + left.handle_right.x;
    let x2 = right.frame + right.handle_left.x;
    let x3 = right.frame;
    let y0 = left.value;
    let y1 = left.value + left.handle_right.y;
    let y2 = right.value + right.handle_left.y;
    let y3 = right.value;

    let denom = (x3 - x0).max(f32::EPSILON);
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = ((x - x0) / denom).clamp(0.0, 1.0);
    for _ in 0..24 {
        let fx = cubic_bezier(x0, x1, x2, x3, mid);
        if (fx - x).abs() < 1e-6 {
            break;
        }
        if fx < x {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(y0, y1, y2, y3, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trip() {
        for i in 0..=10 {
            let angle = ANGLE_MAX_RADIANS * (i as f32) / 10.0;
            let back = weight_to_angle(angle_to_weight(angle));
            assert!((back - angle).abs() < 1e-4, "angle={angle} back={back}");
        }
    }

    #[test]
    fn curve_exact_at_control_points() {
        for density in [CurveDensity::TwoPoint, CurveDensity::ThreePoint] {
            let points = approximation_curve(density);
            let spec = MappingSpec::Curve {
                points: points.clone(),
            };
            for p in &points {
                let sampled = spec.evaluate(p.frame);
                assert!(
                    (sampled - angle_to_weight(p.frame)).abs() < 1e-6,
                    "density={density:?} frame={} sampled={sampled}",
                    p.frame
                );
            }
        }
    }
}
