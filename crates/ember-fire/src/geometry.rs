//! Flame geometry model — pure functions shared by the silhouette builder
//! and the per-tick position clamp

use ember_core::{pack_rgb, Vec2};
use std::f32::consts::PI;

/// Alpha over normalized lifecycle `t` in [0, 1]: quick fade-in, a long
/// full-brightness plateau, then a two-stage fade-out.
pub fn alpha_over_lifecycle(t: f32) -> f32 {
    if t <= 0.2 {
        return 0.5 + 0.5 * (t / 0.2);
    }
    if t <= 0.55 {
        return 1.0;
    }
    if t <= 0.8 {
        return 1.0 - 0.5 * ((t - 0.55) / 0.25);
    }
    (0.5 - 0.5 * ((t - 0.8) / 0.2)).max(0.0)
}

/// Half-width of the flame cone at `height_above_base`: rounded base
/// (quarter-sine), smooth taper, closed to a point at the very top.
///
/// Single source of truth for both the static silhouette and the dynamic
/// clamp; callers must pass identical arguments to stay consistent.
pub fn flame_half_width(
    base_width: f32,
    height_above_base: f32,
    flame_height: f32,
    min_half_width: f32,
) -> f32 {
    let t = (height_above_base / flame_height.max(1.0)).min(1.0);
    if t >= 0.998 {
        return 0.0;
    }
    let half_width = (base_width / 2.0) * ((1.0 - t) * PI * 0.5).sin();
    half_width.max(min_half_width)
}

/// Packed RGB tint for a particle at `height_factor` in [0, 1]:
/// red-orange at the base ramping to pale yellow-white at the tip.
pub fn flame_tint(height_factor: f32) -> u32 {
    let g = (51.0 + 204.0 * height_factor).round() as u8;
    let b = (204.0 * height_factor).round() as u8;
    pack_rgb(255, g, b)
}

/// Samples exactly `count` points along the flame silhouette, as
/// `(x offset from center, height above base)` pairs.
///
/// Order is base-left corner, up the left taper, apex, down the right
/// taper, base-right corner. Small counts degrade to the anchor points:
/// one point is the apex, two are the base corners, three are corners
/// plus apex.
pub fn cone_contour(
    count: usize,
    base_width: f32,
    flame_height: f32,
    min_half_width: f32,
) -> Vec<Vec2> {
    let base_half = base_width / 2.0;
    match count {
        0 => return Vec::new(),
        1 => return vec![Vec2::new(0.0, flame_height)],
        2 => {
            return vec![
                Vec2::new(-base_half, 0.0),
                Vec2::new(base_half, 0.0),
            ]
        }
        _ => {}
    }

    let taper = count - 3;
    let left_steps = taper / 2;
    let right_steps = taper - left_steps;
    let half_at = |h: f32| flame_half_width(base_width, h, flame_height, min_half_width);

    let mut points = Vec::with_capacity(count);
    points.push(Vec2::new(-base_half, 0.0));
    for i in 1..=left_steps {
        let h = (i as f32 / (left_steps + 1) as f32) * flame_height;
        points.push(Vec2::new(-half_at(h), h));
    }
    points.push(Vec2::new(0.0, flame_height));
    for i in (1..=right_steps).rev() {
        let h = (i as f32 / (right_steps + 1) as f32) * flame_height;
        points.push(Vec2::new(half_at(h), h));
    }
    points.push(Vec2::new(base_half, 0.0));
    points
}
