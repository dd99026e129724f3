use std::fmt::Write;

use super::{Mode, Theme, Tokens};

/// Render one mode's tokens as a block of CSS custom properties.
fn render_block(out: &mut String, mode: Mode, tokens: &Tokens) {
    // Writing into a String never fails.
    let _ = writeln!(out, "{} {{", mode.selector());
    for (name, value) in tokens.iter() {
        let _ = writeln!(out, "  --{name}: {value};");
    }
    out.push('}');
}

impl Theme {
    /// Render the assembled modes as CSS custom properties, light on `:root`
    /// and dark on `.dark`, separated by a blank line.
    pub fn to_css(&self) -> String {
        let mut out = String::new();

        for mode in Mode::ALL {
            let Some(tokens) = self.tokens(mode) else {
                continue;
            };
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            render_block(&mut out, mode, tokens);
        }

        out
    }
}
