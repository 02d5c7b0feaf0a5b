#[cfg(test)]
mod tests {
    use crate::palette::{generate_palette, Oklch, MAX_CHROMA};

    #[test]
    fn zero_vividness_is_achromatic() {
        for hue in [0.0, 45.0, 180.0, 359.9] {
            let palette = generate_palette(0.0, hue);
            for (name, color) in palette.entries() {
                assert_eq!(color.chroma, 0.0, "{} should be gray at hue {}", name, hue);
            }
        }
    }

    #[test]
    fn full_vividness_reaches_max_chroma() {
        let palette = generate_palette(100.0, 200.0);
        assert_eq!(palette.primary.chroma, MAX_CHROMA);
        assert_eq!(palette.text.chroma, MAX_CHROMA * 0.5);
        assert_eq!(palette.danger.chroma, MAX_CHROMA);
    }

    #[test]
    fn secondary_is_complementary() {
        for hue in (0..360).step_by(15) {
            let hue = hue as f64;
            let palette = generate_palette(50.0, hue);
            assert_eq!(palette.primary.hue, hue);
            assert_eq!(palette.secondary.hue, (hue + 180.0) % 360.0);
        }
    }

    #[test]
    fn alerts_keep_fixed_hues() {
        let a = generate_palette(20.0, 10.0);
        let b = generate_palette(80.0, 300.0);
        assert_eq!(a.danger.hue, 30.0);
        assert_eq!(a.warning.hue, 100.0);
        assert_eq!(a.success.hue, 160.0);
        assert_eq!(a.info.hue, 260.0);
        assert_eq!(a.info.hue, b.info.hue);
        assert!(a.info.chroma < b.info.chroma);
    }

    #[test]
    fn lightness_ordering() {
        let palette = generate_palette(60.0, 250.0);
        assert!(palette.bg_dark.lightness < palette.bg.lightness);
        assert!(palette.bg.lightness < palette.bg_light.lightness);
        assert!(palette.border_muted.lightness < palette.border.lightness);
        assert!(palette.border.lightness < palette.highlight.lightness);
        assert!(palette.text_muted.lightness < palette.text.lightness);
        assert!(palette.primary.lightness < palette.secondary.lightness);
    }

    #[test]
    fn out_of_range_input_is_clamped_or_wrapped() {
        assert_eq!(generate_palette(150.0, 0.0), generate_palette(100.0, 0.0));
        assert_eq!(generate_palette(-5.0, 0.0), generate_palette(0.0, 0.0));
        assert_eq!(generate_palette(50.0, 370.0), generate_palette(50.0, 10.0));
        assert_eq!(generate_palette(50.0, -90.0), generate_palette(50.0, 270.0));
        assert_eq!(generate_palette(f64::NAN, f64::INFINITY), generate_palette(0.0, 0.0));
        let tiny = generate_palette(50.0, -1e-20);
        assert!(tiny.primary.hue >= 0.0 && tiny.primary.hue < 360.0);
    }

    #[test]
    fn deterministic() {
        assert_eq!(generate_palette(42.0, 123.0), generate_palette(42.0, 123.0));
    }

    #[test]
    fn display_as_css_notation() {
        assert_eq!(Oklch::new(0.68, 0.1, 250.0).to_string(), "oklch(0.68 0.1 250)");
        let palette = generate_palette(50.0, 250.0);
        assert_eq!(palette.bg_dark.to_string(), "oklch(0.1 0.1 250)");
        assert_eq!(palette.secondary.to_string(), "oklch(0.76 0.1 70)");
    }

    #[test]
    fn css_block() {
        let css = generate_palette(0.0, 0.0).to_css();
        assert!(css.starts_with(":root {\n  /* Background Colors */\n  --bg-dark: oklch(0.1 0 0);\n"));
        assert!(css.contains("\n\n  /* Alert Colors */\n  --danger: oklch(0.7 0 30);\n"));
        assert!(css.ends_with("  --info: oklch(0.7 0 260);\n}"));
        assert_eq!(css.matches("  --").count(), 14);
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Oklch::new(1.0, 0.0, 0.0).to_hex(), "#ffffff");
        assert_eq!(Oklch::new(0.0, 0.0, 0.0).to_hex(), "#000000");

        // Grays have equal channels.
        let [r, g, b] = Oklch::new(0.5, 0.0, 123.0).to_srgb();
        assert_eq!(r, g);
        assert_eq!(g, b);

        // Far out of gamut colors are clipped rather than wrapping around.
        let [r, _, _] = Oklch::new(0.7, 0.4, 30.0).to_srgb();
        assert_eq!(r, 255);
    }
}
