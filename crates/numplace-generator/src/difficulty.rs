//! Difficulty presets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A difficulty preset controlling how many cells are cleared from a solved
/// board when deriving a puzzle.
///
/// The hole count is the sole difficulty knob: no solvability or uniqueness
/// analysis happens anywhere in the engine.
///
/// # Examples
///
/// ```
/// use numplace_generator::Difficulty;
///
/// assert_eq!(Difficulty::Easy.holes_to_poke(), 35);
/// assert_eq!(Difficulty::Hard.holes_to_poke(), 55);
/// assert_eq!("medium".parse(), Ok(Difficulty::Medium));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 35 holes out of 81 cells.
    Easy,
    /// 45 holes out of 81 cells.
    Medium,
    /// 55 holes out of 81 cells.
    Hard,
}

/// Error returned when parsing a [`Difficulty`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {name:?}, expected easy, medium, or hard")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub name: String,
}

impl Difficulty {
    /// Array containing all presets, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells cleared from a solved board for this
    /// preset.
    #[must_use]
    pub const fn holes_to_poke(self) -> usize {
        match self {
            Self::Easy => 35,
            Self::Medium => 45,
            Self::Hard => 55,
        }
    }

    /// Returns the display name of this preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_counts() {
        assert_eq!(Difficulty::Easy.holes_to_poke(), 35);
        assert_eq!(Difficulty::Medium.holes_to_poke(), 45);
        assert_eq!(Difficulty::Hard.holes_to_poke(), 55);
        for difficulty in Difficulty::ALL {
            assert!(difficulty.holes_to_poke() < 81);
        }
    }

    #[test]
    fn test_display_and_parse() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
        assert_eq!("EASY".parse(), Ok(Difficulty::Easy));
        assert_eq!("hard".parse(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
