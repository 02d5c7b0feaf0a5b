//! Palette generation for themed user interfaces.
//!
//! [generate_palette()] derives fourteen named colors from two numbers: a *vividness* that sets
//! the chroma of every color, and a *hue* shared by the surface, text, and action colors. Alert
//! colors keep fixed hues so they stay recognizable, but their chroma still follows vividness.
//!

mod oklch;

#[cfg(test)]
mod palette_unittests;

use serde::Serialize;

pub use oklch::Oklch;

/// Chroma at full vividness. Higher values leave the sRGB gamut for many hues.
pub const MAX_CHROMA: f64 = 0.2;

/// Fixed alert hues, in degrees.
pub const DANGER_HUE: f64 = 30.0;
pub const WARNING_HUE: f64 = 100.0;
pub const SUCCESS_HUE: f64 = 160.0;
pub const INFO_HUE: f64 = 260.0;

/// A complete set of named interface colors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Palette {
    pub bg_dark: Oklch,
    pub bg: Oklch,
    pub bg_light: Oklch,

    pub text: Oklch,
    pub text_muted: Oklch,

    pub highlight: Oklch,
    pub border: Oklch,
    pub border_muted: Oklch,

    pub primary: Oklch,
    pub secondary: Oklch,

    pub danger: Oklch,
    pub warning: Oklch,
    pub success: Oklch,
    pub info: Oklch,
}

/// Builds the [Palette] for `vividness` in `[0, 100]` and `hue` in degrees.
///
/// Out of range input never fails: vividness is clamped, hue is wrapped into `[0, 360)`, and
/// non-finite values count as zero.
pub fn generate_palette(vividness: f64, hue: f64) -> Palette {
    let vividness = if vividness.is_finite() { vividness.clamp(0.0, 100.0) } else { 0.0 };
    let hue = wrap_hue(hue);
    let chroma = vividness / 100.0 * MAX_CHROMA;

    let shade = |lightness| Oklch::new(lightness, chroma, hue);
    let alert = |alert_hue| Oklch::new(0.7, chroma, alert_hue);

    Palette {
        // Backgrounds are the darkest shades.
        bg_dark: shade(0.1),
        bg: shade(0.15),
        bg_light: shade(0.2),

        // Text is light and only half as colorful.
        text: Oklch::new(0.96, chroma * 0.5, hue),
        text_muted: Oklch::new(0.76, chroma * 0.5, hue),

        highlight: shade(0.5),
        border: shade(0.4),
        border_muted: shade(0.3),

        primary: shade(0.68),
        secondary: Oklch::new(0.76, chroma, wrap_hue(hue + 180.0)),

        danger: alert(DANGER_HUE),
        warning: alert(WARNING_HUE),
        success: alert(SUCCESS_HUE),
        info: alert(INFO_HUE),
    }
}

fn wrap_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // Tiny negative inputs can round up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Palette {
    /// Every color with its CSS custom property name, in declaration order.
    pub fn entries(&self) -> [(&'static str, Oklch); 14] {
        [
            ("bg-dark", self.bg_dark),
            ("bg", self.bg),
            ("bg-light", self.bg_light),
            ("text", self.text),
            ("text-muted", self.text_muted),
            ("highlight", self.highlight),
            ("border", self.border),
            ("border-muted", self.border_muted),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("danger", self.danger),
            ("warning", self.warning),
            ("success", self.success),
            ("info", self.info),
        ]
    }

    /// Emits the palette as a `:root` block of CSS custom properties.
    pub fn to_css(&self) -> String {
        const GROUPS: [(&str, usize); 5] = [
            ("Background Colors", 3),
            ("Text Colors", 2),
            ("Border Colors", 3),
            ("Action Colors", 2),
            ("Alert Colors", 4),
        ];

        let entries = self.entries();
        let mut remaining = entries.iter();
        let mut css = String::from(":root {\n");
        for (index, (title, count)) in GROUPS.iter().enumerate() {
            if index > 0 {
                css.push('\n');
            }
            css.push_str(&format!("  /* {} */\n", title));
            for (name, color) in remaining.by_ref().take(*count) {
                css.push_str(&format!("  --{}: {};\n", name, color));
            }
        }
        css.push('}');
        css
    }
}
