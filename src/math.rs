//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` / colour inputs, making them straightforward to
//! unit-test.

use std::f64::consts::TAU;

use bevy::color::{LinearRgba, Mix};
use bevy::prelude::Vec2;
use hexx::{HexLayout, HexOrientation};

/// Position of `value` between `a` and `b`, unclamped.
///
/// Returns `0.0` when `a == b` instead of dividing by zero.
///
/// # Examples
/// ```
/// # use hex_currents::math::inverse_lerp;
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(inverse_lerp(2.0, 2.0, 7.0), 0.0);
/// ```
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    (value - a) / (b - a)
}

/// Normalised elevation of a land sample: `0` at sea level, `1` at or past the
/// mountain level, linear in between.
pub fn mountain_factor(sea_level: f32, mountain_level: f32, sample: f32) -> f32 {
    inverse_lerp(sea_level, mountain_level, sample).clamp(0.0, 1.0)
}

/// Projects an unrecentred cell centre onto a cylinder in 3-D noise space.
///
/// The horizontal coordinate becomes an angle around a circle of
/// `noise_radius` in the XZ plane, so `center.x` and
/// `center.x + circumference` land on the same point. The vertical coordinate
/// scales the Y axis.
pub fn cylinder_sample_point(
    center: Vec2,
    circumference: f32,
    noise_radius: f64,
    noise_height: f64,
) -> [f64; 3] {
    let t = f64::from(center.x / circumference);
    let r = t * TAU;
    [
        r.sin() * noise_radius,
        f64::from(center.y) * noise_height * noise_radius,
        r.cos() * noise_radius,
    ]
}

/// Corner offsets of a pointy-top hexagon with the given circumradius,
/// in winding order.
pub fn hex_corner_offsets(radius: f32) -> [Vec2; 6] {
    let layout = HexLayout {
        orientation: HexOrientation::Pointy,
        scale: Vec2::splat(radius),
        ..Default::default()
    };
    let corners = layout.center_aligned_hex_corners();
    std::array::from_fn(|i| corners[i])
}

/// Samples a piecewise-linear colour gradient at `t`.
///
/// `stops` are `(position, colour)` pairs sorted by position. Values before
/// the first stop or after the last one take the end colours. An empty
/// gradient is transparent black.
pub fn sample_gradient(stops: &[(f32, LinearRgba)], t: f32) -> LinearRgba {
    let Some(&(first_at, first)) = stops.first() else {
        return LinearRgba::NONE;
    };
    if t <= first_at {
        return first;
    }
    for pair in stops.windows(2) {
        let (a_at, a) = pair[0];
        let (b_at, b) = pair[1];
        if t < b_at {
            return a.mix(&b, inverse_lerp(a_at, b_at, t).clamp(0.0, 1.0));
        }
    }
    stops[stops.len() - 1].1
}

/// Camera distance at which a rectangle of size `extent` centred on the view
/// axis fits inside a perspective frustum.
///
/// `vertical_fov` is in radians; `aspect` is width over height.
pub fn framing_distance(extent: Vec2, vertical_fov: f32, aspect: f32) -> f32 {
    let half_height = (extent.y * 0.5).max(extent.x * 0.5 / aspect);
    half_height / (vertical_fov * 0.5).tan()
}
