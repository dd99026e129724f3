#![deny(unsafe_code)]
//! Command line front end for oklch-theme.
//!
//! Subcommands:
//! - `convert <HEX>...` print the OKLCH form of each color
//! - `generate --primary --dark --light` print a light/dark token theme
//! - `variations <HEX>` print hue-tinted surface colors

mod error;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use oklch_theme::{
    hex_to_oklch,
    theme::{Mode, Modes, ThemeReport, Variations},
    Component, DarkAdjustment,
};

#[derive(Debug, Parser)]
#[command(name = "theme", about = "Convert hex colors to OKLCH and generate design-token themes")]
struct Cli {
    /// Output as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
    Both,
}

impl From<ModeArg> for Modes {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Light => Modes::LIGHT,
            ModeArg::Dark => Modes::DARK,
            ModeArg::Both => Modes::all(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert hex colors to OKLCH.
    Convert {
        /// Colors such as "#8B42E6" or "8b42e6".
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Generate a design-token theme around a primary color.
    Generate {
        /// The primary (brand) color.
        #[arg(long)]
        primary: String,

        /// The dark sample color.
        #[arg(long)]
        dark: String,

        /// The light sample color.
        #[arg(long)]
        light: String,

        /// Which variants to generate.
        #[arg(long, value_enum, default_value_t = ModeArg::Both)]
        mode: ModeArg,

        /// Lightness of the primary color in the dark theme.
        #[arg(long, default_value_t = DarkAdjustment::DEFAULT_LIGHTNESS)]
        dark_lightness: Component,

        /// Chroma of the primary color in the dark theme.
        #[arg(long, default_value_t = DarkAdjustment::DEFAULT_CHROMA)]
        dark_chroma: Component,
    },
    /// Derive surface colors tinted with the hue of a base color.
    Variations {
        /// The base color.
        base: String,

        /// Which variants to derive.
        #[arg(long, value_enum, default_value_t = ModeArg::Both)]
        mode: ModeArg,
    },
}

/// One `oklch(...)` line per color, or a JSON array of objects.
fn convert_output(colors: &[String], json: bool) -> Result<String, CliError> {
    let converted = colors
        .iter()
        .map(|hex| hex_to_oklch(hex).map(|oklch| (hex, oklch)))
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        let info = converted
            .iter()
            .map(|(hex, oklch)| {
                serde_json::json!({
                    "hex": hex,
                    "css": oklch.to_string(),
                    "lightness": oklch.lightness,
                    "chroma": oklch.chroma,
                    "hue": oklch.hue,
                })
            })
            .collect::<Vec<_>>();
        return Ok(serde_json::to_string_pretty(&info)?);
    }

    Ok(converted
        .iter()
        .map(|(_, oklch)| oklch.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// CSS custom properties, or the full report as JSON.
fn generate_output(
    primary: &str,
    dark: &str,
    light: &str,
    adjustment: &DarkAdjustment,
    modes: Modes,
    json: bool,
) -> Result<String, CliError> {
    let report = ThemeReport::generate(primary, dark, light, adjustment, modes)?;

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.theme.to_css())
    }
}

/// The variations of each selected mode, grouped under the mode name.
fn variations_output(base: &str, modes: Modes, json: bool) -> Result<String, CliError> {
    let base = hex_to_oklch(base)?;
    let selected = Mode::ALL
        .into_iter()
        .filter(|m| modes.contains(m.flag()))
        .map(|m| (m, Variations::for_mode(&base, m)))
        .collect::<Vec<_>>();

    if json {
        let mut info = serde_json::Map::new();
        for (m, v) in &selected {
            info.insert(m.name().to_owned(), serde_json::to_value(v)?);
        }
        return Ok(serde_json::to_string_pretty(&info)?);
    }

    let mut lines = Vec::new();
    for (m, v) in &selected {
        lines.push(format!("{}:", m.name()));
        for (name, color) in v.iter() {
            lines.push(format!("  {name}: {color}"));
        }
    }
    Ok(lines.join("\n"))
}

/// The message printed to stderr when a command fails.
fn error_output(error: &CliError, json: bool) -> String {
    if json {
        let j = serde_json::json!({"error": error.to_string()});
        serde_json::to_string_pretty(&j).unwrap_or_default()
    } else {
        format!("error: {error}")
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Convert { colors } => convert_output(&colors, cli.json),
        Command::Generate {
            primary,
            dark,
            light,
            mode,
            dark_lightness,
            dark_chroma,
        } => {
            let adjustment = DarkAdjustment {
                lightness: dark_lightness,
                chroma: dark_chroma,
            };
            generate_output(&primary, &dark, &light, &adjustment, mode.into(), cli.json)
        }
        Command::Variations { base, mode } => variations_output(&base, mode.into(), cli.json),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}", error_output(&e, json_mode));
            process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use oklch_theme::ColorError;
    use serde_json::Value;

    use super::*;

    const PURPLE: &str = "oklch(0.560 0.232 298.935)";
    const DARK_PURPLE: &str = "oklch(0.541 0.281 298.935)";

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn generate(modes: Modes, json: bool) -> String {
        generate_output(
            "#8B42E6",
            "#1E1E2E",
            "#F5F5F5",
            &DarkAdjustment::default(),
            modes,
            json,
        )
        .unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn json_flag_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["theme", "convert", "#8B42E6", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Convert { colors } if colors == ["#8B42E6"]));
    }

    #[test]
    fn argument_errors_exit_with_2() {
        let err = Cli::try_parse_from(["theme", "convert"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = Cli::try_parse_from(["theme", "generate", "--primary", "#8B42E6"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn convert_prints_one_line_per_color() {
        let out = convert_output(&strings(&["#8B42E6", "ffffff", "#000000"]), false).unwrap();
        assert_eq!(
            out,
            format!("{PURPLE}\noklch(1.000 0.000 0.000)\noklch(0.000 0.000 0.000)")
        );
    }

    #[test]
    fn convert_json_is_an_array_of_objects() {
        let out = convert_output(&strings(&["#8B42E6", "#D2691E"]), true).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        let items = json.as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["hex"], "#8B42E6");
        assert_eq!(items[0]["css"], PURPLE);
        assert!((items[0]["hue"].as_f64().unwrap() - 298.935).abs() < 1.0e-3);
        assert_eq!(items[1]["css"], "oklch(0.634 0.155 50.266)");
    }

    #[test]
    fn convert_stops_at_the_first_invalid_color() {
        let err = convert_output(&strings(&["#8B42E6", "GGGGGG"]), false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Color(ColorError::InvalidDigits(ref input)) if input == "GGGGGG"
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn generate_prints_css_variables() {
        let out = generate(Modes::all(), false);
        assert!(out.starts_with(":root {\n  --radius: 0.65rem;\n"), "{out}");
        assert!(out.contains(&format!("  --primary: {PURPLE};\n")), "{out}");
        assert!(out.contains(".dark {\n"), "{out}");
        assert!(out.contains(&format!("  --ring: {DARK_PURPLE};\n")), "{out}");

        let light_only = generate(Modes::LIGHT, false);
        assert!(!light_only.contains(".dark"));
    }

    #[test]
    fn generate_json_matches_report_shape() {
        let json: Value = serde_json::from_str(&generate(Modes::all(), true)).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["theme"]["light"]["primary"], PURPLE);
        assert_eq!(json["theme"]["dark"]["primary"], DARK_PURPLE);
        assert_eq!(json["conversions"]["primary"], PURPLE);
        assert!(json["conversions"]["dark"].is_string());
        assert!(json["conversions"]["light"].is_string());
    }

    #[test]
    fn generate_respects_dark_adjustment() {
        let adjustment = DarkAdjustment {
            lightness: 0.7,
            chroma: 0.1,
        };
        let out =
            generate_output("#8B42E6", "#000000", "#FFFFFF", &adjustment, Modes::DARK, false)
                .unwrap();
        assert!(out.starts_with(".dark {"), "{out}");
        assert!(out.contains("  --primary: oklch(0.700 0.100 298.935);\n"), "{out}");
    }

    #[test]
    fn variations_are_grouped_by_mode() {
        let out = variations_output("#8B42E6", Modes::all(), false).unwrap();
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "light:");
        assert_eq!(lines[1], "  background: oklch(0.980 0.005 298.935)");
        assert_eq!(lines[5], "dark:");
        assert_eq!(lines[6], "  background: oklch(0.150 0.010 298.935)");
        assert_eq!(lines[9], "  border: oklch(0.300 0.020 298.935)");
    }

    #[test]
    fn variations_json_is_keyed_by_mode() {
        let out = variations_output("#8B42E6", Modes::DARK, true).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        let modes = json.as_object().unwrap();

        assert!(!modes.contains_key("light"));
        assert_eq!(json["dark"]["foreground"], "oklch(0.980 0.005 298.935)");
        assert_eq!(json["dark"]["muted"], "oklch(0.250 0.010 298.935)");
    }

    #[test]
    fn errors_render_as_text_or_json() {
        let err = variations_output("GGGGGG", Modes::all(), true).unwrap_err();

        let text = error_output(&err, false);
        assert!(text.starts_with("error: "), "{text}");
        assert!(text.contains("GGGGGG"), "{text}");

        let json: Value = serde_json::from_str(&error_output(&err, true)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object["error"].as_str().unwrap().contains("GGGGGG"));
        assert_eq!(err.exit_code(), 1);
    }
}
