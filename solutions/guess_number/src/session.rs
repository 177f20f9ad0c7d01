//! One play-through: the secret, the attempt counter and the guess state machine.
//!
//! The session never touches the terminal. It takes raw guess tokens and hands
//! back either feedback or a [`GuessError`] for the caller to print.

use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;
use tracing::debug;

use crate::difficulty::Difficulty;
use crate::secret::SecretSource;

/// Counted guesses allowed per session, whatever the difficulty.
pub const MAX_ATTEMPTS: u32 = 10;

/// Where the session stands between guesses.
///
/// Evaluation happens inside [`Session::guess`], so it is never observed from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingGuess,
    Won,
    Exhausted,
}

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Won | State::Exhausted)
    }
}

/// A guess that was not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Invalid input! Please enter a valid number.")]
    NotANumber,
    #[error("Please enter a number between 1 and {max}!")]
    OutOfRange { max: u32 },
    #[error("the session is already over")]
    SessionOver,
}

/// Response to a counted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooLow { remaining: u32 },
    TooHigh { remaining: u32 },
    Correct { secret: u32, attempts: u32 },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::TooLow { remaining } => write!(
                f,
                "❌ Too low! Try a higher number. ({remaining} attempts left)"
            ),
            Feedback::TooHigh { remaining } => write!(
                f,
                "❌ Too high! Try a lower number. ({remaining} attempts left)"
            ),
            Feedback::Correct { secret, attempts } => write!(
                f,
                "🎉 Congratulations! You guessed the number {secret} in {attempts} attempt(s)!"
            ),
        }
    }
}

// One game: the chosen range, the hidden number and how far the player has got
#[derive(Debug)]
pub struct Session {
    difficulty: Difficulty,
    secret: u32,
    attempts_used: u32,
    state: State,
}

impl Session {
    /// Start a session, drawing its secret from `source` exactly once.
    pub fn new(difficulty: Difficulty, source: &mut impl SecretSource) -> Self {
        // Draw the hidden number before any guess can be read
        let secret = source.draw(difficulty.range_max());
        debug!(%difficulty, secret, "session created");

        // Every session starts with no attempts used
        Session {
            difficulty,
            secret,
            attempts_used: 0,
            state: State::AwaitingGuess,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn range_max(&self) -> u32 {
        self.difficulty.range_max()
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn max_attempts(&self) -> u32 {
        MAX_ATTEMPTS
    }

    pub fn remaining(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts_used)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// The secret, but only once the session has ended.
    pub fn revealed_secret(&self) -> Option<u32> {
        self.is_over().then_some(self.secret)
    }

    /// Turn a raw token into an in-range guess without touching the session.
    pub fn parse_guess(&self, token: &str) -> Result<u32, GuessError> {
        let max = self.range_max();

        // Parse the trimmed token as a signed integer so negatives count as numbers
        let value: i64 = match token.trim().parse() {
            Ok(value) => value,
            // Numbers too big for i64 are still numbers, just out of range
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(GuessError::OutOfRange { max });
            }
            Err(_) => return Err(GuessError::NotANumber),
        };

        // Reject numbers outside [1, max]
        if value < 1 || value > i64::from(max) {
            return Err(GuessError::OutOfRange { max });
        }

        Ok(value as u32)
    }

    /// Feed one raw token through the state machine.
    ///
    /// Rejected tokens leave the attempt counter alone. A counted miss that
    /// uses the last attempt moves the session to [`State::Exhausted`].
    pub fn guess(&mut self, token: &str) -> Result<Feedback, GuessError> {
        // A finished session takes no more guesses
        if self.is_over() {
            return Err(GuessError::SessionOver);
        }

        // Only a well-formed, in-range guess uses up an attempt
        let guess = self.parse_guess(token)?;
        self.attempts_used += 1;

        // Compare against the secret and build the player's feedback
        let feedback = match guess.cmp(&self.secret) {
            Ordering::Equal => {
                self.state = State::Won;
                Feedback::Correct {
                    secret: self.secret,
                    attempts: self.attempts_used,
                }
            }
            Ordering::Less => Feedback::TooLow {
                remaining: self.remaining(),
            },
            Ordering::Greater => Feedback::TooHigh {
                remaining: self.remaining(),
            },
        };

        // A miss on the last attempt ends the session
        if self.state == State::AwaitingGuess && self.attempts_used >= MAX_ATTEMPTS {
            self.state = State::Exhausted;
        }

        debug!(guess, attempts = self.attempts_used, state = ?self.state, "guess evaluated");
        Ok(feedback)
    }
}
