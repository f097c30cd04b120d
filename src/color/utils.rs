use libm::floorf;

use crate::color::{Hsv, Rgb};

/// Wrap hue into `[0, 1)`
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue - floorf(hue);
    // floor can round a tiny negative hue up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

#[inline]
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn denormalize(value: f32) -> u8 {
    (clamp_unit(value) * 255.0 + 0.5) as u8
}

/// Convert a floating point HSV color to RGB using the hexcone model
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn hsv2rgb(color: Hsv) -> Rgb {
    let sat = clamp_unit(color.sat);
    let val = clamp_unit(color.val);

    let h = wrap_hue(color.hue) * 6.0;
    let sector = floorf(h);
    let f = h - sector;

    let p = val * (1.0 - sat);
    let q = val * (1.0 - sat * f);
    let t = val * (1.0 - sat * (1.0 - f));

    let (r, g, b) = match (sector as u8) % 6 {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };

    Rgb {
        r: denormalize(r),
        g: denormalize(g),
        b: denormalize(b),
    }
}

/// Blend two HSV colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0.0 = all a, 1.0 = all b)
///
/// Hue travels along the shorter arc of the wheel. A black endpoint takes
/// the hue of the other one, so fading in from black does not sweep colors.
pub fn mix(a: Hsv, b: Hsv, amount_of_b: f32) -> Hsv {
    let t = clamp_unit(amount_of_b);

    let mut from_hue = a.hue;
    let mut to_hue = b.hue;
    if a.val <= 0.0 {
        from_hue = to_hue;
    }
    if b.val <= 0.0 {
        to_hue = from_hue;
    }

    let mut delta = wrap_hue(to_hue) - wrap_hue(from_hue);
    if delta > 0.5 {
        delta -= 1.0;
    } else if delta < -0.5 {
        delta += 1.0;
    }

    Hsv {
        hue: wrap_hue(from_hue + delta * t),
        sat: a.sat + (b.sat - a.sat) * t,
        val: a.val + (b.val - a.val) * t,
    }
}
