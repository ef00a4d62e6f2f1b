//! The eight canonical categories (trigrams).
//!
//! Canonical order is the Earlier-Heaven sequence; every vector, ranking
//! tie-break, and lookup index in the workspace follows it.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TriadError;

/// One of the eight trigrams.
///
/// Declaration order is the canonical order, so the derived `Ord` and
/// `index()` agree with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trigram {
    /// ☰ heaven: creativity, initiative.
    Qian,
    /// ☱ lake: harmony, joy.
    Dui,
    /// ☲ fire: expression, clarity.
    Li,
    /// ☳ thunder: action, momentum.
    Zhen,
    /// ☴ wind: adaptability, influence.
    Xun,
    /// ☵ water: inquiry, depth.
    Kan,
    /// ☶ mountain: stability, restraint.
    Gen,
    /// ☷ earth: receptivity, support.
    Kun,
}

impl Trigram {
    /// Number of trigrams.
    pub const COUNT: usize = 8;

    /// All trigrams in canonical order.
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// Position in canonical order (0..8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Trigram at a canonical position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase romanized name, used as the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "qian",
            Self::Dui => "dui",
            Self::Li => "li",
            Self::Zhen => "zhen",
            Self::Xun => "xun",
            Self::Kan => "kan",
            Self::Gen => "gen",
            Self::Kun => "kun",
        }
    }

    /// CJK character for the trigram.
    pub fn character(self) -> char {
        match self {
            Self::Qian => '乾',
            Self::Dui => '兌',
            Self::Li => '離',
            Self::Zhen => '震',
            Self::Xun => '巽',
            Self::Kan => '坎',
            Self::Gen => '艮',
            Self::Kun => '坤',
        }
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Qian => '☰',
            Self::Dui => '☱',
            Self::Li => '☲',
            Self::Zhen => '☳',
            Self::Xun => '☴',
            Self::Kan => '☵',
            Self::Gen => '☶',
            Self::Kun => '☷',
        }
    }

    /// Natural image the trigram stands for.
    pub fn image(self) -> &'static str {
        match self {
            Self::Qian => "heaven",
            Self::Dui => "lake",
            Self::Li => "fire",
            Self::Zhen => "thunder",
            Self::Xun => "wind",
            Self::Kan => "water",
            Self::Gen => "mountain",
            Self::Kun => "earth",
        }
    }

    /// Lines from bottom to top; `true` is a solid (yang) line.
    pub fn lines(self) -> [bool; 3] {
        // Canonical index i encodes the lines as 7 - i, bottom line most significant.
        let bits = 7 - self.index();
        [bits & 0b100 != 0, bits & 0b010 != 0, bits & 0b001 != 0]
    }

    /// Trigram with the given lines (bottom to top).
    pub fn from_lines(lines: [bool; 3]) -> Self {
        let bits =
            (usize::from(lines[0]) << 2) | (usize::from(lines[1]) << 1) | usize::from(lines[2]);
        Self::ALL[7 - bits]
    }

    /// Trigram read upside down.
    pub fn reversed(self) -> Self {
        let [bottom, middle, top] = self.lines();
        Self::from_lines([top, middle, bottom])
    }

    /// Trigram with every line flipped.
    pub fn complement(self) -> Self {
        Self::ALL[7 - self.index()]
    }

    /// Parse a romanized name (any case) or CJK character.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|t| {
            t.name().eq_ignore_ascii_case(trimmed)
                || trimmed.chars().eq(std::iter::once(t.character()))
        })
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Trigram {
    type Err = TriadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| TriadError::UnknownCategory(s.to_string()))
    }
}

// String form in both directions so trigrams work as map keys in TOML and JSON.
impl Serialize for Trigram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Trigram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
