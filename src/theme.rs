use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::countdown::Urgency;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme read from the config file. Only the first call wins.
pub fn init(theme: Theme) {
    let _ = THEME.set(theme);
}

/// Get the active theme (default until `init` is called).
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub urgent: Color,
    pub normal: Color,
    pub accent: Color,
    pub success: Color,
    pub assistant: Color,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub selected: Style,
    pub bezel: Style,
    pub disabled: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            urgent: Color::Red,
            normal: Color::Blue,
            accent: Color::Cyan,
            success: Color::Green,
            assistant: Color::Magenta,
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            bezel: Style::default().fg(Color::DarkGray),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    /// Colour for an urgency level: red when urgent, blue otherwise.
    pub fn urgency_color(&self, urgency: Urgency) -> Color {
        match urgency {
            Urgency::Urgent => self.urgent,
            Urgency::Normal => self.normal,
        }
    }

    pub fn urgency(&self, urgency: Urgency) -> Style {
        Style::default().fg(self.urgency_color(urgency))
    }

    /// Filled badge style used for countdown pills.
    pub fn badge(&self, urgency: Urgency) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.urgency_color(urgency))
            .add_modifier(Modifier::BOLD)
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            urgent: Color::Rgb(255, 85, 85),
            normal: Color::Rgb(98, 114, 164),
            accent: Color::Rgb(139, 233, 253),
            success: Color::Rgb(80, 250, 123),
            assistant: Color::Rgb(255, 121, 198),
            header: Style::default().fg(Color::Rgb(248, 248, 242)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(139, 233, 253)),
            bezel: Style::default().fg(Color::Rgb(68, 71, 90)),
            ..Self::default()
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            urgent: Color::Rgb(251, 73, 52),
            normal: Color::Rgb(131, 165, 152),
            accent: Color::Rgb(250, 189, 47),
            success: Color::Rgb(184, 187, 38),
            assistant: Color::Rgb(211, 134, 155),
            header: Style::default().fg(Color::Rgb(235, 219, 178)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            status: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(80, 73, 69)),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(250, 189, 47)),
            bezel: Style::default().fg(Color::Rgb(102, 92, 84)),
            ..Self::default()
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            urgent: Color::Rgb(191, 97, 106),
            normal: Color::Rgb(94, 129, 172),
            accent: Color::Rgb(136, 192, 208),
            success: Color::Rgb(163, 190, 140),
            assistant: Color::Rgb(180, 142, 173),
            header: Style::default().fg(Color::Rgb(229, 233, 240)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(Color::Rgb(67, 76, 94)),
            status: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(67, 76, 94)),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(136, 192, 208)),
            bezel: Style::default().fg(Color::Rgb(67, 76, 94)),
            ..Self::default()
        }
    }
}

// ── TOML config types ──

/// `[theme]` table of `config.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub urgent: Option<String>,
    pub normal: Option<String>,
    pub accent: Option<String>,
    pub dim: Option<String>,
    pub border: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub bezel: Option<String>,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Theme {
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        if let Some(c) = self.urgent.as_deref().and_then(parse_color) {
            theme.urgent = c;
        }
        if let Some(c) = self.normal.as_deref().and_then(parse_color) {
            theme.normal = c;
        }
        if let Some(c) = self.accent.as_deref().and_then(parse_color) {
            theme.accent = c;
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = self.dim.as_deref().and_then(parse_color) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = self.border.as_deref().and_then(parse_color) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = self.status_fg.as_deref().and_then(parse_color) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = self.status_bg.as_deref().and_then(parse_color) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = self.bezel.as_deref().and_then(parse_color) {
            theme.bezel = theme.bezel.fg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 && s.is_ascii() {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" | "purple" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightblue" => Some(Color::LightBlue),
        _ => None,
    }
}
