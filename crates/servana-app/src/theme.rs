//! Theme provider: dark-mode flag and derived palettes.
//!
//! The flag is sampled from the host appearance once at startup. A manual
//! toggle pins the choice: later host appearance changes are ignored until the
//! user asks to follow the system again.

use crate::config::ThemePreference;

/// Environment variable that forces the sampled host appearance
pub const APPEARANCE_ENV_VAR: &str = "SERVANA_APPEARANCE";

/// Host appearance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(&self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

/// Sample the host appearance.
///
/// Checks `SERVANA_APPEARANCE` (`light`/`dark`) first, then the
/// `COLORFGBG` convention (`fg;bg`, dark when bg is one of the first eight
/// ANSI colors other than 7). Anything else reads as light.
pub fn detect_system_appearance() -> Appearance {
    if let Ok(value) = std::env::var(APPEARANCE_ENV_VAR) {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => return Appearance::Dark,
            "light" => return Appearance::Light,
            other => tracing::warn!("Ignoring {}={:?}", APPEARANCE_ENV_VAR, other),
        }
    }

    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| appearance_from_colorfgbg(&v))
        .unwrap_or(Appearance::Light)
}

fn appearance_from_colorfgbg(value: &str) -> Option<Appearance> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg < 7 || bg == 8 {
        Appearance::Dark
    } else {
        Appearance::Light
    })
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Colors derived from the dark-mode flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub background: Rgb,
    pub card: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub border: Rgb,
    pub notification: Rgb,
    pub secondary: Rgb,
    pub error: Rgb,
    pub success: Rgb,
}

pub const LIGHT_PALETTE: Palette = Palette {
    primary: Rgb(0x62, 0x00, 0xEE),
    background: Rgb(0xF5, 0xF5, 0xF5),
    card: Rgb(0xFF, 0xFF, 0xFF),
    text: Rgb(0x21, 0x21, 0x21),
    text_muted: Rgb(0x75, 0x75, 0x75),
    border: Rgb(0xE0, 0xE0, 0xE0),
    notification: Rgb(0xFF, 0x52, 0x52),
    secondary: Rgb(0x03, 0xDA, 0xC6),
    error: Rgb(0xB0, 0x00, 0x20),
    success: Rgb(0x4C, 0xAF, 0x50),
};

pub const DARK_PALETTE: Palette = Palette {
    primary: Rgb(0xBB, 0x86, 0xFC),
    background: Rgb(0x12, 0x12, 0x12),
    card: Rgb(0x1E, 0x1E, 0x1E),
    text: Rgb(0xE0, 0xE0, 0xE0),
    text_muted: Rgb(0x9E, 0x9E, 0x9E),
    border: Rgb(0x33, 0x33, 0x33),
    notification: Rgb(0xCF, 0x66, 0x79),
    secondary: Rgb(0x03, 0xDA, 0xC6),
    error: Rgb(0xCF, 0x66, 0x79),
    success: Rgb(0x81, 0xC7, 0x84),
};

/// Process-wide theme state, owned by [`crate::state::AppState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    is_dark_mode: bool,
    follows_system: bool,
}

impl ThemeState {
    /// Resolve the startup theme from configuration and the sampled host appearance
    pub fn new(preference: ThemePreference, system: Appearance) -> Self {
        match preference {
            ThemePreference::System => Self {
                is_dark_mode: system.is_dark(),
                follows_system: true,
            },
            ThemePreference::Light => Self {
                is_dark_mode: false,
                follows_system: false,
            },
            ThemePreference::Dark => Self {
                is_dark_mode: true,
                follows_system: false,
            },
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn follows_system(&self) -> bool {
        self.follows_system
    }

    /// Flip dark mode and pin the manual choice
    pub fn toggle(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
        self.follows_system = false;
    }

    /// Go back to tracking the host appearance
    pub fn follow_system(&mut self, system: Appearance) {
        self.follows_system = true;
        self.is_dark_mode = system.is_dark();
    }

    /// Host appearance changed; returns `true` if the theme changed with it
    pub fn system_appearance_changed(&mut self, system: Appearance) -> bool {
        if !self.follows_system || self.is_dark_mode == system.is_dark() {
            return false;
        }
        self.is_dark_mode = system.is_dark();
        true
    }

    pub fn palette(&self) -> &'static Palette {
        if self.is_dark_mode {
            &DARK_PALETTE
        } else {
            &LIGHT_PALETTE
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemePreference::System, Appearance::Light)
    }
}
