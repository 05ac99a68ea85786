//! Interactive session
//!
//! Username prompt, profile restore, then the five-choice menu.

use crate::config::GameSettings;
use crate::console::Console;
use crate::game::AdaptiveGame;
use crate::profile::{LoadStatus, ProfileStore, UserProfile, is_valid_username};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use rand::Rng;
use tracing::info;

/// Name used when the player enters nothing
pub const DEFAULT_USERNAME: &str = "Player";

const USERNAME_RULE: &str = "Usernames may only use letters, digits, '_' and '-'.";

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Mode 1: the player guesses
    GuessMyNumber,
    /// Mode 2: the game guesses
    GuessYourNumber,
    ShowStats,
    Save,
    /// Save and leave
    Quit,
}

impl MenuChoice {
    /// Parse a `1`-`5` selection
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::GuessMyNumber),
            "2" => Some(Self::GuessYourNumber),
            "3" => Some(Self::ShowStats),
            "4" => Some(Self::Save),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run a full session until the player quits or input ends
///
/// `username` skips the prompt when given. A typed name that can't key its
/// own record is asked for again.
///
/// # Errors
/// Returns an error for invalid settings, an unusable `username`, or when
/// the console can't be written.
pub fn run_session<C: Console, G: Rng>(
    console: &mut C,
    settings: &GameSettings,
    username: Option<String>,
    rng: G,
) -> Result<()> {
    console.say(&"🎮 Adaptive Number Guessing Game".bold().to_string())?;
    console.say(&"=".repeat(40))?;

    let username = match username {
        Some(name) => {
            let name = normalize_username(&name);
            if !is_valid_username(&name) {
                bail!("invalid username {name:?}: {USERNAME_RULE}");
            }
            name
        }
        None => loop {
            let Some(line) = console.ask("Enter your username: ")? else {
                console.say("\nGoodbye!")?;
                return Ok(());
            };
            let name = normalize_username(&line);
            if is_valid_username(&name) {
                break name;
            }
            console.say(USERNAME_RULE)?;
        },
    };

    let mut profile =
        UserProfile::with_settings(&username, settings).context("invalid game settings")?;
    let store = ProfileStore::new(&settings.profile_dir);
    match profile.load(&store) {
        LoadStatus::Restored => {
            console.say(&format!("Welcome back, {username}! I remember you."))?;
        }
        LoadStatus::Fresh => info!(%username, "starting new profile"),
        LoadStatus::Failed(e) => console.say(&format!("Couldn't load profile: {e}"))?,
    }

    let mut game = AdaptiveGame::new(profile, store, rng);

    loop {
        console.say("\n🎯 Game Modes:")?;
        console.say("1. You guess my number (with adaptive hints)")?;
        console.say("2. I guess your number (I learn your patterns)")?;
        console.say("3. Show my stats")?;
        console.say("4. Save profile")?;
        console.say("5. Quit")?;

        let prompt = format!("\n{username}, what would you like to do? (1-5): ");
        let Some(line) = console.ask(&prompt)? else {
            console.say("\nGoodbye!")?;
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::GuessMyNumber) => {
                game.play_user_guesses(console)?;
            }
            Some(MenuChoice::GuessYourNumber) => {
                game.play_computer_guesses(console)?;
            }
            Some(MenuChoice::ShowStats) => game.show_stats(console)?,
            Some(MenuChoice::Save) => {
                game.save_profile(console)?;
            }
            Some(MenuChoice::Quit) => {
                game.save_profile(console)?;
                console.say("👋 Thanks for playing! Your profile has been saved.")?;
                return Ok(());
            }
            None => console.say("Please enter 1-5.")?,
        }
    }
}

/// Trimmed name, or `DEFAULT_USERNAME` when blank
#[must_use]
pub fn normalize_username(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_USERNAME.to_string()
    } else {
        trimmed.to_string()
    }
}
