//! Catppuccin theme colors

use ratatui::style::Color;

use crate::types::{ServerHealth, Severity, Trend};

/// Theme colors
#[derive(Debug, Clone)]
pub struct CatppuccinTheme {
    // Base colors
    pub base: Color,
    pub mantle: Color,

    // Surface colors
    pub surface0: Color,
    pub surface1: Color,

    // Text colors
    pub text: Color,
    pub subtext0: Color,

    // Accent colors
    pub blue: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
}

impl CatppuccinTheme {
    /// Catppuccin Mocha palette
    pub fn mocha() -> Self {
        Self {
            // Base
            base: hex_to_color("#1e1e2e"),
            mantle: hex_to_color("#181825"),

            // Surface
            surface0: hex_to_color("#313244"),
            surface1: hex_to_color("#45475a"),

            // Text
            text: hex_to_color("#cdd6f4"),
            subtext0: hex_to_color("#a6adc8"),

            // Accents
            blue: hex_to_color("#89b4fa"),
            green: hex_to_color("#a6e3a1"),
            red: hex_to_color("#f38ba8"),
            yellow: hex_to_color("#f9e2af"),
        }
    }

    /// Bar color for a severity band
    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Nominal => self.green,
            Severity::Elevated => self.yellow,
            Severity::Critical => self.red,
        }
    }

    pub fn health(&self, health: ServerHealth) -> Color {
        match health {
            ServerHealth::Online => self.green,
            ServerHealth::Warning => self.yellow,
            ServerHealth::Offline => self.red,
        }
    }

    pub fn trend(&self, trend: Trend) -> Color {
        match trend {
            Trend::Up => self.green,
            Trend::Down => self.red,
            Trend::Neutral => self.subtext0,
        }
    }
}

impl Default for CatppuccinTheme {
    fn default() -> Self {
        Self::mocha()
    }
}

/// Convert hex color string to a ratatui Color
fn hex_to_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(0)
    };
    Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#a6e3a1"), Color::Rgb(0xa6, 0xe3, 0xa1));
        assert_eq!(hex_to_color("ffffff"), Color::Rgb(255, 255, 255));
        assert_eq!(hex_to_color("#zz"), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        let theme = CatppuccinTheme::mocha();
        assert_eq!(theme.severity(Severity::Nominal), theme.green);
        assert_eq!(theme.severity(Severity::Elevated), theme.yellow);
        assert_eq!(theme.severity(Severity::Critical), theme.red);
    }

    #[test]
    fn test_offline_is_red() {
        let theme = CatppuccinTheme::mocha();
        assert_eq!(theme.health(ServerHealth::Offline), theme.red);
    }
}
