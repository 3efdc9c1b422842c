// Match outcome from final health values

use std::fmt;

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    Draw,
    Player1Wins,
    Player2Wins,
}

impl MatchOutcome {
    /// Banner text shown when the match ends
    pub fn banner(self) -> &'static str {
        match self {
            Self::Draw => "DRAW",
            Self::Player1Wins => "PLAYER 1 WINS",
            Self::Player2Wins => "PLAYER 2 WINS",
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.banner())
    }
}

/// Decide the match from both fighters' health; higher health wins
pub fn resolve(p1_health: i32, p2_health: i32) -> MatchOutcome {
    use std::cmp::Ordering;

    match p1_health.cmp(&p2_health) {
        Ordering::Equal => MatchOutcome::Draw,
        Ordering::Greater => MatchOutcome::Player1Wins,
        Ordering::Less => MatchOutcome::Player2Wins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(100, 100), MatchOutcome::Draw);
        assert_eq!(resolve(50, 49), MatchOutcome::Player1Wins);
        assert_eq!(resolve(0, 3), MatchOutcome::Player2Wins);
        // Overkill still compares by value
        assert_eq!(resolve(-7, -2), MatchOutcome::Player2Wins);
        assert_eq!(resolve(-5, -5), MatchOutcome::Draw);
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(MatchOutcome::Draw.to_string(), "DRAW");
        assert_eq!(MatchOutcome::Player1Wins.to_string(), "PLAYER 1 WINS");
        assert_eq!(MatchOutcome::Player2Wins.to_string(), "PLAYER 2 WINS");
    }
}
