use std::fmt;

use serde::Serialize;

/// A color in the OKLCH perceptual color space.
///
/// Equal steps in `lightness` and `chroma` look like roughly equal steps to the eye, which
/// makes the space a good fit for deriving whole palettes from a couple of numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Oklch {
    /// Perceived lightness, from 0 (black) to 1 (white).
    pub lightness: f64,

    /// Colorfulness, 0 for grays. Values above about 0.37 are outside every display gamut.
    pub chroma: f64,

    /// Hue angle in degrees, in `[0, 360)`.
    pub hue: f64,
}

impl Oklch {
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Oklch {
        Oklch { lightness, chroma, hue }
    }

    /// Converts to an sRGB `#rrggbb` string, clipping channels that fall outside the gamut.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_srgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Converts to 8-bit sRGB channels by way of OKLab and linear sRGB.
    pub fn to_srgb(&self) -> [u8; 3] {
        let (sin, cos) = self.hue.to_radians().sin_cos();
        let a = self.chroma * cos;
        let b = self.chroma * sin;
        let lightness = self.lightness;

        // OKLab to nonlinear LMS cone responses.
        let l = (lightness + 0.3963377774 * a + 0.2158037573 * b).powi(3);
        let m = (lightness - 0.1055613458 * a - 0.0638541728 * b).powi(3);
        let s = (lightness - 0.0894841775 * a - 1.2914855480 * b).powi(3);

        let linear = [
            4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        ];
        linear.map(|channel| (gamma_encode(channel).clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

fn gamma_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Formats as CSS color notation, `oklch(0.68 0.12 250)` for example.
impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("oklch({} {} {})", self.lightness, self.chroma, self.hue))
    }
}
