//! Angle utilities shared by the direction correlator and the statistics layer.

use nalgebra::Vector2;

/// Axis the displacement direction of a flight is measured against: `+z`.
#[inline]
pub fn reference_axis() -> Vector2<f64> {
    Vector2::new(0.0, 1.0)
}

/// Unsigned angle between two 2D vectors in degrees, in [0, 180].
///
/// Returns `None` when either vector has zero length.
#[inline]
pub fn angle_between_deg(a: &Vector2<f64>, b: &Vector2<f64>) -> Option<f64> {
    let na = a.norm();
    let nb = b.norm();
    if na == 0.0 || nb == 0.0 {
        return None;
    }
    let cos = (a.dot(b) / (na * nb)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Angle of `displacement` from [`reference_axis`] in degrees, in [0, 180].
#[inline]
pub fn direction_from_axis_deg(displacement: &Vector2<f64>) -> Option<f64> {
    angle_between_deg(displacement, &reference_axis())
}
