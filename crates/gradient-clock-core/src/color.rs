//! RGB color values and HSL conversion.
//!
//! Colors are kept as `f32` channels in `[0, 1]` until they cross the toolkit
//! boundary, where [`Rgb::to_srgb8`] quantizes them to 8-bit.

/// An RGB color with `f32` channels in `[0, 1]`, full opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Creates a color from raw channel values. No clamping is applied.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear blend between `self` (`t = 0`) and `other` (`t = 1`).
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Quantizes the channels to 8-bit `[r, g, b]`.
    #[inline]
    pub fn to_srgb8(self) -> [u8; 3] {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

/// Converts an HSL triple to RGB.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` in `[0, 1]`. Standard sector
/// algorithm: chroma `c = (1 - |2l - 1|) * s`, secondary component
/// `x = c * (1 - |(h/60 mod 2) - 1|)`, pick the pre-offset triple by which
/// 60-degree sector `h` falls into, then shift every channel by `m = l - c/2`.
/// Each output channel is clamped to `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: (r + m).clamp(0.0, 1.0),
        g: (g + m).clamp(0.0, 1.0),
        b: (b + m).clamp(0.0, 1.0),
    }
}
