use std::fmt;

/// The three ranges a player can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Upper bound of the closed interval `[1, range_max]`.
    pub fn range_max(self) -> u32 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 500,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// The token the player types to pick this difficulty.
    pub fn menu_key(self) -> &'static str {
        match self {
            Difficulty::Easy => "1",
            Difficulty::Medium => "2",
            Difficulty::Hard => "3",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of reading the difficulty token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub difficulty: Difficulty,
    /// Set when the token matched nothing and Medium was chosen for the player.
    pub fell_back: bool,
}

/// Map a raw menu token to a difficulty. Never fails: unknown tokens fall back to Medium.
pub fn select(token: &str) -> Selection {
    let token = token.trim();

    // Look the token up among the menu keys
    match Difficulty::ALL.into_iter().find(|d| d.menu_key() == token) {
        Some(difficulty) => Selection {
            difficulty,
            fell_back: false,
        },
        None => Selection {
            difficulty: Difficulty::Medium,
            fell_back: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that each menu key picks its range
    #[test]
    fn menu_keys_map_to_ranges() {
        assert_eq!(select("1").difficulty.range_max(), 50);
        assert_eq!(select("2").difficulty.range_max(), 100);
        assert_eq!(select("3").difficulty.range_max(), 500);
        assert_eq!(select("3").difficulty.label(), "Hard");
        assert!(!select(" 1 ").fell_back);
    }

    // Test that every other token falls back to Medium
    #[test]
    fn anything_else_falls_back_to_medium() {
        for token in ["", "0", "4", "easy", "1.0", "11", "-1", "two"] {
            let selection = select(token);
            assert_eq!(selection.difficulty, Difficulty::Medium, "token {token:?}");
            assert_eq!(selection.difficulty.range_max(), 100);
            assert!(selection.fell_back, "token {token:?}");
        }
    }
}
