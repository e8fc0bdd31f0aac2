//! Colors and sequential palettes for fills.

use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(hex: u32) -> Self {
        Self { r: (hex >> 16) as u8, g: (hex >> 8) as u8, b: hex as u8 }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!("[scale] invalid hex color {text:?}, expected #rrggbb"));
        }
        let packed = u32::from_str_radix(digits, 16)?;
        Ok(Self::from_u32(packed))
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> { Self::from_hex(&value) }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self { value.to_string() }
}

macro_rules! scheme {
    ($($hex:literal),* $(,)?) => { [$(Rgb::from_u32($hex)),*] };
}

// Nine-class sequential ColorBrewer schemes, light to dark.
const REDS: [Rgb; 9] = scheme![0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d];
const BLUES: [Rgb; 9] = scheme![0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b];
const GREENS: [Rgb; 9] = scheme![0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b];
const GREYS: [Rgb; 9] = scheme![0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000];
const ORANGES: [Rgb; 9] = scheme![0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704];
const PURPLES: [Rgb; 9] = scheme![0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d];

/// Named sequential scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Reds,
    Blues,
    Greens,
    Greys,
    Oranges,
    Purples,
}

impl Scheme {
    pub fn colors(self) -> &'static [Rgb] {
        match self {
            Scheme::Reds => &REDS,
            Scheme::Blues => &BLUES,
            Scheme::Greens => &GREENS,
            Scheme::Greys => &GREYS,
            Scheme::Oranges => &ORANGES,
            Scheme::Purples => &PURPLES,
        }
    }
}

/// Palette as configured: a named scheme or an explicit list of colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Palette {
    Scheme(Scheme),
    Colors(Vec<Rgb>),
}

impl Default for Palette {
    fn default() -> Self { Palette::Scheme(Scheme::default()) }
}

impl Palette {
    pub fn colors(&self) -> Vec<Rgb> {
        match self {
            Palette::Scheme(scheme) => scheme.colors().to_vec(),
            Palette::Colors(colors) => colors.clone(),
        }
    }
}
