//! The animated dark palette that anchors the background gradient.
//!
//! Hue, saturation, and lightness each oscillate sinusoidally around a fixed
//! base as the phase sweeps `[0, 1]`, so the palette stays inside a dark
//! blue/violet band: hue in `[200, 260]`, saturation in `[0.3, 0.7]`,
//! lightness in `[0.15, 0.25]`.

use std::f32::consts::TAU;

use crate::color::{Rgb, hsl_to_rgb};

const BASE_HUE: f32 = 230.0;
const HUE_SWING: f32 = 30.0;
const BASE_SATURATION: f32 = 0.5;
const SATURATION_SWING: f32 = 0.2;
const BASE_LIGHTNESS: f32 = 0.2;
const LIGHTNESS_SWING: f32 = 0.05;

/// Returns the palette color for `phase` in `[0, 1]`.
///
/// `shift` offsets the oscillation per gradient anchor: 0.0 for the first
/// color, 1.0 for the second. Deterministic, no internal state.
pub fn dark_color(phase: f32, shift: f32) -> Rgb {
    let (h, s, l) = dark_hsl(phase, shift);
    hsl_to_rgb(h, s, l)
}

fn dark_hsl(phase: f32, shift: f32) -> (f32, f32, f32) {
    let wave = ((phase + shift) * TAU).sin();
    // The modulo cannot fire for the swing above; kept so a wider swing
    // still produces a valid hue.
    let hue = (BASE_HUE + HUE_SWING * wave).rem_euclid(360.0);
    let saturation = BASE_SATURATION + SATURATION_SWING * wave;
    let lightness = BASE_LIGHTNESS + LIGHTNESS_SWING * wave;
    (hue, saturation, lightness)
}
