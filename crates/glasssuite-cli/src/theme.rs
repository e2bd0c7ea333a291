//! Accent palettes for the console, named after well-known product looks.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeId {
    Discord,
    Turbo,
    GitHub,
    Next,
    Tailwind,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Discord,
        ThemeId::Turbo,
        ThemeId::GitHub,
        ThemeId::Next,
        ThemeId::Tailwind,
    ];

    pub fn cycle(self) -> Self {
        match self {
            ThemeId::Discord => ThemeId::Turbo,
            ThemeId::Turbo => ThemeId::GitHub,
            ThemeId::GitHub => ThemeId::Next,
            ThemeId::Next => ThemeId::Tailwind,
            ThemeId::Tailwind => ThemeId::Discord,
        }
    }

    pub fn theme(&self) -> &'static Theme {
        match self {
            ThemeId::Discord => &THEMES[0],
            ThemeId::Turbo => &THEMES[1],
            ThemeId::GitHub => &THEMES[2],
            ThemeId::Next => &THEMES[3],
            ThemeId::Tailwind => &THEMES[4],
        }
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        ThemeId::Discord
    }
}

impl FromStr for ThemeId {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "discord" => Ok(ThemeId::Discord),
            "turbo" => Ok(ThemeId::Turbo),
            "github" => Ok(ThemeId::GitHub),
            "next" | "next.js" => Ok(ThemeId::Next),
            "tailwind" => Ok(ThemeId::Tailwind),
            _ => Err(()),
        }
    }
}

pub struct Theme {
    pub id: ThemeId,
    pub title: &'static str,
    pub accent1: Color,
    pub accent2: Color,
    pub description: &'static str,
}

pub const THEMES: [Theme; 5] = [
    Theme {
        id: ThemeId::Discord,
        title: "Discord",
        accent1: Color::Rgb(0x58, 0x65, 0xF2),
        accent2: Color::Rgb(0xA7, 0x8B, 0xFA),
        description: "Deep blue + soft purple glow",
    },
    Theme {
        id: ThemeId::Turbo,
        title: "Turbo",
        accent1: Color::Rgb(0x22, 0xD3, 0xEE),
        accent2: Color::Rgb(0x60, 0xA5, 0xFA),
        description: "Clean dark with neon accents",
    },
    Theme {
        id: ThemeId::GitHub,
        title: "GitHub",
        accent1: Color::Rgb(0x2F, 0x81, 0xF7),
        accent2: Color::Rgb(0x7E, 0xE7, 0x87),
        description: "Graphite + crisp contrast",
    },
    Theme {
        id: ThemeId::Next,
        title: "Next.js",
        accent1: Color::Rgb(0x11, 0x18, 0x27),
        accent2: Color::Rgb(0x60, 0xA5, 0xFA),
        description: "Slate-black with subtle light",
    },
    Theme {
        id: ThemeId::Tailwind,
        title: "Tailwind",
        accent1: Color::Rgb(0x38, 0xBD, 0xF8),
        accent2: Color::Rgb(0x22, 0xC5, 0x5E),
        description: "Gray-blue with modern cyan",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_resolves_to_its_own_palette() {
        for id in ThemeId::ALL {
            assert_eq!(id.theme().id, id);
        }
    }

    #[test]
    fn cycle_walks_the_palette_order() {
        let mut id = ThemeId::default();
        for expected in ThemeId::ALL {
            assert_eq!(id, expected);
            id = id.cycle();
        }
        assert_eq!(id, ThemeId::Discord);
    }

    #[test]
    fn theme_names_parse_case_insensitively() {
        assert_eq!("github".parse::<ThemeId>(), Ok(ThemeId::GitHub));
        assert_eq!("Next.js".parse::<ThemeId>(), Ok(ThemeId::Next));
        assert!("solarized".parse::<ThemeId>().is_err());
    }

    #[test]
    fn persisted_theme_name_is_the_pascal_case_id() {
        let json = serde_json::to_string(&ThemeId::Tailwind).expect("serialize");
        assert_eq!(json, "\"Tailwind\"");
    }
}
