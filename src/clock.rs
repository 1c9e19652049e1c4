use std::f32::consts::{FRAC_PI_2, TAU};

use crate::{basis::Color, canvas::Canvas};


pub(crate) const GRADIENT_TOP: Color = Color::from_hex(0x667eea);
pub(crate) const GRADIENT_BOTTOM: Color = Color::from_hex(0x764ba2);
/// Dial outline, minute hand and hub share the gradient's top color.
pub(crate) const ACCENT: Color = GRADIENT_TOP;
pub(crate) const HAND: Color = Color::from_hex(0x333333);
pub(crate) const DIAL: Color = Color::from_hex(0xffffff);

const BANDS: u32 = 100;

/// Returns a `size` × `size` canvas holding the vertical gradient backdrop,
/// stepped in `BANDS` horizontal bands from `GRADIENT_TOP` to
/// `GRADIENT_BOTTOM`. Band boundaries tile the full height exactly.
pub(crate) fn gradient_background(size: u32) -> Canvas {
    let mut canvas = Canvas::new(size, size, GRADIENT_TOP);
    for band in 0..BANDS {
        let y0 = size * band / BANDS;
        let y1 = size * (band + 1) / BANDS;
        let color = GRADIENT_TOP.lerp(GRADIENT_BOTTOM, band as f32 / BANDS as f32);
        canvas.fill_rect(0, y0 as i32, size, y1 - y0, color);
    }
    canvas
}

/// Angle of hour position `i` in screen coordinates, where angle 0 points
/// right and positive angles rotate clockwise. Position 0 is 12 o'clock.
pub(crate) fn hour_angle(i: u32) -> f32 {
    i as f32 * TAU / 12.0 - FRAC_PI_2
}

fn radial_point(center: f32, angle: f32, dist: f32) -> (f32, f32) {
    (center + angle.cos() * dist, center + angle.sin() * dist)
}

/// Paints the clock face onto `canvas`, centered, frozen at 3:00.
/// Layering: dial, ticks, hour hand, minute hand, hub.
pub(crate) fn paint_clock(canvas: &mut Canvas) {
    let size = canvas.width() as f32;
    let center = size / 2.0;
    let radius = size * 0.35;

    canvas.fill_circle(center, center, radius, DIAL);
    canvas.stroke_circle(center, center, radius, (size * 0.03).round(), ACCENT);

    for i in 0..12 {
        let angle = hour_angle(i);
        let (x0, y0) = radial_point(center, angle, radius * 0.75);
        let (x1, y1) = radial_point(center, angle, radius * 0.9);
        canvas.line(x0, y0, x1, y1, (size * 0.015).round(), HAND);
    }

    let (hx, hy) = radial_point(center, hour_angle(3), radius * 0.5);
    canvas.line(center, center, hx, hy, (size * 0.02).round(), HAND);

    let (mx, my) = radial_point(center, hour_angle(0), radius * 0.7);
    canvas.line(center, center, mx, my, (size * 0.015).round(), ACCENT);

    canvas.fill_circle(center, center, size * 0.03, ACCENT);
}
