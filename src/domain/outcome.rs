//! Outcome symbols and the color table that produces them.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Background color of a cell whose letter sits in the correct position.
pub const HIT_COLOR: &str = "rgb(34, 238, 51)";
/// Background color of a cell whose letter is present elsewhere in the word.
pub const NEAR_COLOR: &str = "rgb(238, 222, 35)";

/// Per-letter outcome of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Correct letter in correct position
    Hit,
    /// Correct letter in wrong position
    Near,
    /// Letter not matched, or color not recognized
    Miss,
}

impl Outcome {
    pub fn symbol(self) -> char {
        match self {
            Outcome::Hit => 'O',
            Outcome::Near => 'o',
            Outcome::Miss => ' ',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'O' => Some(Outcome::Hit),
            'o' => Some(Outcome::Near),
            ' ' => Some(Outcome::Miss),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn rgb_regex() -> &'static Regex {
    static RGB: OnceLock<Regex> = OnceLock::new();
    RGB.get_or_init(|| {
        Regex::new(
            r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9.]+)\s*)?\)$",
        )
        .expect("valid rgb regex")
    })
}

/// Canonical spelling of a computed color.
///
/// `rgb(34,238,51)`, `rgb(34, 238, 51)` and `rgba(34, 238, 51, 1)` all become
/// `rgb(34, 238, 51)`. Translucent colors and anything unparsable are only
/// trimmed and lowercased.
pub fn normalize_color(color: &str) -> String {
    let color = color.trim().to_ascii_lowercase();
    let Some(caps) = rgb_regex().captures(&color) else {
        return color;
    };
    if let Some(alpha) = caps.get(4) {
        if alpha.as_str().parse::<f32>().ok() != Some(1.0) {
            return color;
        }
    }
    format!("rgb({}, {}, {})", &caps[1], &caps[2], &caps[3])
}

/// Mapping from computed background color to outcome.
///
/// Colors absent from the table classify as [`Outcome::Miss`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: HashMap<String, Outcome>,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new(HIT_COLOR, NEAR_COLOR)
    }
}

impl ColorTable {
    pub fn new(hit: &str, near: &str) -> Self {
        Self::empty().with_color(hit, Outcome::Hit).with_color(near, Outcome::Near)
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_color(mut self, color: &str, outcome: Outcome) -> Self {
        self.entries.insert(normalize_color(color), outcome);
        self
    }

    pub fn lookup(&self, color: &str) -> Outcome {
        self.entries
            .get(&normalize_color(color))
            .copied()
            .unwrap_or(Outcome::Miss)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
