//! The static design-token tables. Most tokens are fixed; the ones marked
//! [`Token::Primary`] are filled in with the converted primary color.

use super::Mode;

/// The value of a token in a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A literal CSS value.
    Fixed(&'static str),
    /// The primary color for the mode being assembled.
    Primary,
}

use Token::{Fixed, Primary};

const WHITE: Token = Fixed("oklch(1 0 0)");
const NEAR_WHITE: Token = Fixed("oklch(0.985 0 0)");
const INK: Token = Fixed("oklch(0.141 0.005 285.823)");
const ON_PRIMARY: Token = Fixed("oklch(0.969 0.016 293.756)");
const LIGHT_GRAY: Token = Fixed("oklch(0.967 0.001 286.375)");
const SURFACE: Token = Fixed("oklch(0.21 0.006 285.885)");
const LIGHT_BORDER: Token = Fixed("oklch(0.92 0.004 286.32)");
const DARK_GRAY: Token = Fixed("oklch(0.274 0.006 286.033)");

/// Tokens for the light theme, in output order.
#[rustfmt::skip]
pub const LIGHT: &[(&str, Token)] = &[
    ("radius",                     Fixed("0.65rem")),
    ("background",                 WHITE),
    ("foreground",                 INK),
    ("card",                       WHITE),
    ("card-foreground",            INK),
    ("popover",                    WHITE),
    ("popover-foreground",         INK),
    ("primary",                    Primary),
    ("primary-foreground",         ON_PRIMARY),
    ("secondary",                  LIGHT_GRAY),
    ("secondary-foreground",       SURFACE),
    ("muted",                      LIGHT_GRAY),
    ("muted-foreground",           Fixed("oklch(0.552 0.016 285.938)")),
    ("accent",                     LIGHT_GRAY),
    ("accent-foreground",          SURFACE),
    ("destructive",                Fixed("oklch(0.577 0.245 27.325)")),
    ("border",                     LIGHT_BORDER),
    ("input",                      LIGHT_BORDER),
    ("ring",                       Primary),
    ("chart-1",                    Fixed("oklch(0.646 0.222 41.116)")),
    ("chart-2",                    Fixed("oklch(0.6 0.118 184.704)")),
    ("chart-3",                    Fixed("oklch(0.398 0.07 227.392)")),
    ("chart-4",                    Fixed("oklch(0.828 0.189 84.429)")),
    ("chart-5",                    Fixed("oklch(0.769 0.188 70.08)")),
    ("sidebar",                    NEAR_WHITE),
    ("sidebar-foreground",         INK),
    ("sidebar-primary",            Primary),
    ("sidebar-primary-foreground", ON_PRIMARY),
    ("sidebar-accent",             LIGHT_GRAY),
    ("sidebar-accent-foreground",  SURFACE),
    ("sidebar-border",             LIGHT_BORDER),
    ("sidebar-ring",               Primary),
];

/// Tokens for the dark theme, in output order.
#[rustfmt::skip]
pub const DARK: &[(&str, Token)] = &[
    ("background",                 INK),
    ("foreground",                 NEAR_WHITE),
    ("card",                       SURFACE),
    ("card-foreground",            NEAR_WHITE),
    ("popover",                    SURFACE),
    ("popover-foreground",         NEAR_WHITE),
    ("primary",                    Primary),
    ("primary-foreground",         ON_PRIMARY),
    ("secondary",                  DARK_GRAY),
    ("secondary-foreground",       NEAR_WHITE),
    ("muted",                      DARK_GRAY),
    ("muted-foreground",           Fixed("oklch(0.705 0.015 286.067)")),
    ("accent",                     DARK_GRAY),
    ("accent-foreground",          NEAR_WHITE),
    ("destructive",                Fixed("oklch(0.704 0.191 22.216)")),
    ("border",                     Fixed("oklch(1 0 0 / 10%)")),
    ("input",                      Fixed("oklch(1 0 0 / 15%)")),
    ("ring",                       Primary),
    ("chart-1",                    Fixed("oklch(0.488 0.243 264.376)")),
    ("chart-2",                    Fixed("oklch(0.696 0.17 162.48)")),
    ("chart-3",                    Fixed("oklch(0.769 0.188 70.08)")),
    ("chart-4",                    Fixed("oklch(0.627 0.265 303.9)")),
    ("chart-5",                    Fixed("oklch(0.645 0.246 16.439)")),
    ("sidebar",                    SURFACE),
    ("sidebar-foreground",         NEAR_WHITE),
    ("sidebar-primary",            Primary),
    ("sidebar-primary-foreground", ON_PRIMARY),
    ("sidebar-accent",             DARK_GRAY),
    ("sidebar-accent-foreground",  NEAR_WHITE),
    ("sidebar-border",             Fixed("oklch(1 0 0 / 10%)")),
    ("sidebar-ring",               Primary),
];

/// The table for `mode`.
pub fn table(mode: Mode) -> &'static [(&'static str, Token)] {
    match mode {
        Mode::Light => LIGHT,
        Mode::Dark => DARK,
    }
}
