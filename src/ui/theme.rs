use ratatui::style::Color;

use crate::prefs::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub panel: Color,
    pub muted: Color,
    pub text: Color,
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub highlight: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(15, 20, 28),
    panel: Color::Rgb(28, 38, 52),
    muted: Color::Rgb(130, 144, 164),
    text: Color::Rgb(226, 234, 244),
    primary: Color::Rgb(111, 201, 255),
    success: Color::Rgb(112, 220, 142),
    warning: Color::Rgb(255, 210, 110),
    highlight: Color::Rgb(32, 57, 84),
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(248, 249, 251),
    panel: Color::Rgb(200, 208, 220),
    muted: Color::Rgb(96, 108, 126),
    text: Color::Rgb(24, 30, 40),
    primary: Color::Rgb(20, 110, 190),
    success: Color::Rgb(30, 140, 70),
    warning: Color::Rgb(190, 110, 0),
    highlight: Color::Rgb(214, 230, 248),
};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    Light,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::System,
            Theme::System => Theme::Dark,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
            Theme::System if terminal_is_light(std::env::var("COLORFGBG").ok().as_deref()) => {
                &LIGHT
            }
            Theme::System => &DARK,
        }
    }

    /// Stored theme, or the default when missing or unrecognized.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        store
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    pub fn save(&self, store: &mut dyn PreferenceStore) -> std::io::Result<()> {
        store.set(THEME_KEY, self.as_str())
    }
}

/// `COLORFGBG` is `fg;bg`; background 7 or 15 means a light terminal.
fn terminal_is_light(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .map(|bg| matches!(bg.trim(), "7" | "15"))
        .unwrap_or(false)
}
