use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Day,
    Night,
}

impl Mode {
    /// Initial mode from the host's colour-scheme hint. Read once at startup.
    pub fn from_ambient(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Night
        } else {
            Self::Day
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Day => Palette {
                dark: Rgb::INK,
                light: Rgb::PAPER,
            },
            Self::Night => Palette {
                dark: Rgb::PAPER,
                light: Rgb::INK,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const INK: Rgb = Rgb(10, 10, 20);
    pub const PAPER: Rgb = Rgb(255, 255, 255);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// The two global colour tokens. `dark` is used for text and strokes,
/// `light` for backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    pub dark: Rgb,
    pub light: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Mode::default().palette()
    }
}
