// Number guessing game: pick a difficulty, guess the secret in ten tries, play again.
use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

pub mod console;
pub mod difficulty;
pub mod logging;
pub mod replay;
pub mod secret;
pub mod session;

use console::Console;
use difficulty::Difficulty;
use secret::SecretSource;
use session::{Session, State};

// Presentation settings shared by every game in one run.
// The attempt limit is not here: it is fixed at `session::MAX_ATTEMPTS`.
pub struct Config {
    pub rule_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { rule_width: 50 }
    }
}

// Play games until the player declines a replay or the input runs out.
// Each pass of the loop owns a brand-new Session, so nothing leaks between games.
pub fn run<R, W, S>(config: &Config, console: &mut Console<R, W>, source: &mut S) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: SecretSource,
{
    // Count games only for the log
    let mut games = 0u32;

    loop {
        games += 1;
        info!(game = games, "game started");

        // A closed input mid-game ends the program the same way a "no" does
        let Some(state) = play_session(config, console, source)? else {
            info!(game = games, "input closed during game");
            break;
        };
        info!(game = games, outcome = ?state, "game finished");

        // Ask to play again; anything but yes (or closed input) ends the run
        let answer = console.prompt("\nDo you want to play again? (yes/no): ")?;
        match answer {
            Some(answer) if replay::wants_replay(&answer) => console.say("\n")?,
            _ => break,
        }
    }

    // Say goodbye once, however the run ended
    console.say("\nThanks for playing! Goodbye! 👋")?;
    Ok(())
}

// One full play-through. Returns the terminal state, or None if the input closed first.
fn play_session<R, W, S>(
    config: &Config,
    console: &mut Console<R, W>,
    source: &mut S,
) -> Result<Option<State>>
where
    R: BufRead,
    W: Write,
    S: SecretSource,
{
    // Banner
    let rule = "=".repeat(config.rule_width);
    console.say(&rule)?;
    console.say("Welcome to the Number Guessing Game!")?;
    console.say(&rule)?;

    // Menu
    console.say("\nChoose difficulty level:")?;
    for difficulty in Difficulty::ALL {
        console.say(format_args!(
            "{}. {} (1-{})",
            difficulty.menu_key(),
            difficulty,
            difficulty.range_max()
        ))?;
    }

    // Read the choice; unknown tokens fall back to Medium with a notice
    let Some(choice) = console.prompt("\nEnter your choice (1-3): ")? else {
        return Ok(None);
    };
    let selection = difficulty::select(&choice);
    if selection.fell_back {
        console.say("Invalid choice! Setting to Medium.")?;
    }

    // The secret is drawn here, before any guess is read
    let mut session = Session::new(selection.difficulty, source);

    // Tell the player what they are up against
    console.say(format_args!("\nDifficulty: {}", session.difficulty()))?;
    console.say(format_args!(
        "I'm thinking of a number between 1 and {}.",
        session.range_max()
    ))?;
    console.say(format_args!(
        "You have {} attempts to guess it!\n",
        session.max_attempts()
    ))?;

    // Keep asking until the session reaches Won or Exhausted
    while !session.is_over() {
        let Some(token) = console.prompt("Enter your guess: ")? else {
            return Ok(None);
        };

        match session.guess(&token) {
            Ok(feedback) if session.state() == State::Won => {
                console.say(format_args!("\n{feedback}"))?
            }
            Ok(feedback) => console.say(feedback)?,
            // Rejected guesses only print their notice; the counter is untouched
            Err(notice) => console.say(notice)?,
        }
    }

    // A lost game reveals the secret; a win already showed it
    if let (State::Exhausted, Some(secret)) = (session.state(), session.revealed_secret()) {
        console.say(format_args!("\n😢 Game Over! The number was {secret}."))?;
    }

    Ok(Some(session.state()))
}
