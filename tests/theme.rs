use oklch_theme::{
    theme::{Mode, Modes, ThemeReport, Variations},
    ColorError, DarkAdjustment,
};
use serde_json::Value;

fn report(modes: Modes) -> ThemeReport {
    ThemeReport::generate(
        "#8B42E6",
        "#1E1E2E",
        "#F5F5F5",
        &DarkAdjustment::default(),
        modes,
    )
    .unwrap()
}

#[test]
fn report_serializes_to_expected_shape() {
    let json = serde_json::to_value(report(Modes::all())).unwrap();

    assert_eq!(json["success"], Value::Bool(true));
    assert_eq!(json["conversions"]["primary"], "oklch(0.560 0.232 298.935)");
    assert!(json["conversions"]["dark"].is_string());
    assert!(json["conversions"]["light"].is_string());

    assert_eq!(json["theme"]["light"]["primary"], "oklch(0.560 0.232 298.935)");
    assert_eq!(json["theme"]["light"]["radius"], "0.65rem");
    assert_eq!(json["theme"]["dark"]["primary"], "oklch(0.541 0.281 298.935)");
    assert_eq!(json["theme"]["dark"]["sidebar-ring"], "oklch(0.541 0.281 298.935)");
}

#[test]
fn unselected_modes_are_left_out_of_json() {
    let json = serde_json::to_value(report(Modes::LIGHT)).unwrap();
    let theme = json["theme"].as_object().unwrap();

    assert!(theme.contains_key("light"));
    assert!(!theme.contains_key("dark"));
}

#[test]
fn token_order_survives_serialization() {
    let text = serde_json::to_string(&report(Modes::LIGHT)).unwrap();
    let radius = text.find("\"radius\"").unwrap();
    let background = text.find("\"background\"").unwrap();
    let primary = text.find("\"primary\":").unwrap();

    assert!(radius < background);
    assert!(background < primary);
}

#[test]
fn custom_dark_adjustment_reaches_dark_tokens() {
    let adjustment = DarkAdjustment {
        lightness: 0.7,
        chroma: 0.1,
    };
    let report =
        ThemeReport::generate("#8B42E6", "#000000", "#FFFFFF", &adjustment, Modes::DARK).unwrap();
    let dark = report.theme.dark().unwrap();

    assert_eq!(dark.get("primary"), Some("oklch(0.700 0.100 298.935)"));
}

#[test]
fn css_output_declares_both_selectors() {
    let css = report(Modes::all()).theme.to_css();

    assert!(css.starts_with(":root {\n  --radius: 0.65rem;\n"));
    assert!(css.contains("}\n\n.dark {\n"));
    assert!(css.contains("  --primary: oklch(0.541 0.281 298.935);\n"));
    assert!(css.ends_with('}'));
}

#[test]
fn invalid_inputs_are_reported() {
    let generate = |primary| {
        ThemeReport::generate(
            primary,
            "#000000",
            "#FFFFFF",
            &DarkAdjustment::default(),
            Modes::all(),
        )
    };

    assert_eq!(
        generate("12345").unwrap_err(),
        ColorError::InvalidFormat("12345".into())
    );
    assert_eq!(
        generate("GGGGGG").unwrap_err(),
        ColorError::InvalidDigits("GGGGGG".into())
    );
}

#[test]
fn variations_keep_base_hue() {
    let base = oklch_theme::hex_to_oklch("#D2691E").unwrap();

    for mode in Mode::ALL {
        let variations = Variations::for_mode(&base, mode);
        for (name, color) in variations.iter() {
            assert_eq!(color.hue.to_bits(), base.hue.to_bits(), "{name}");
        }
    }

    let json = serde_json::to_value(Variations::for_mode(&base, Mode::Dark)).unwrap();
    assert_eq!(json["background"], "oklch(0.150 0.010 50.266)");
    assert_eq!(json["foreground"], "oklch(0.980 0.005 50.266)");
}
