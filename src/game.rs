//! Adaptive game orchestration
//!
//! Runs both game modes against a `Console`, feeding results of human-guess
//! games back into the profile's learners.

use crate::console::Console;
use crate::core::{HintStyle, RangeError, SearchRange};
use crate::hints::{Hint, HintStrategy, HintStrategyType};
use crate::profile::{MAX_RANGE_SIZE, MIN_RANGE_SIZE, ProfileStore, UserProfile};
use colored::{ColoredString, Colorize};
use rand::Rng;
use std::io;
use tracing::{info, warn};

/// Weight kept from the previous alpha on each guess
const ALPHA_KEEP: f64 = 0.9;
/// Weight kept from the previous average attempts on each win
const AVG_KEEP: f64 = 0.8;
/// Average attempts below which the range grows
const GROW_BELOW: f64 = 4.0;
/// Average attempts above which the range shrinks
const SHRINK_ABOVE: f64 = 8.0;
const GROW_FACTOR: f64 = 1.2;
const SHRINK_FACTOR: f64 = 0.8;

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The hidden value was found
    Won { attempts: u32 },
    /// The player's answers left no possible value
    Contradiction { attempts: u32 },
    /// Input ended before the game finished
    Interrupted,
}

/// Player's answer to one of the system's guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Higher,
    Lower,
    Correct,
}

impl Answer {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "h" => Some(Self::Higher),
            "l" => Some(Self::Lower),
            "c" => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Orchestrator owning the session's profile
pub struct AdaptiveGame<G> {
    profile: UserProfile,
    store: ProfileStore,
    rng: G,
}

impl<G: Rng> AdaptiveGame<G> {
    #[must_use]
    pub const fn new(profile: UserProfile, store: ProfileStore, rng: G) -> Self {
        Self {
            profile,
            store,
            rng,
        }
    }

    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub const fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    /// Mode 1: the player guesses a random secret
    ///
    /// # Errors
    /// Returns console write errors.
    pub fn play_user_guesses<C: Console>(&mut self, console: &mut C) -> io::Result<RoundOutcome> {
        let range = SearchRange::opening(self.profile.range_size);
        let secret = self.rng.random_range(range.lo()..=range.hi());

        console.say(&format!(
            "\n🎯 I'm thinking of a number between {} and {}.",
            range.lo(),
            range.hi()
        ))?;
        console.say(&format!(
            "💡 Based on your profile, I think you'll pick numbers around position {:.2}",
            self.profile.alpha
        ))?;

        let style = self.profile.bandit.select_hint_style(&mut self.rng);
        console.say(&format!("🎲 Using hint style: {style}"))?;

        self.play_user_round(console, secret, style)
    }

    /// Mode 1 with a known secret and hint style
    ///
    /// Guesses outside the current range or not numeric are re-prompted
    /// without counting. A win trains both learners and the profile stats.
    ///
    /// # Errors
    /// Returns console write errors.
    pub fn play_user_round<C: Console>(
        &mut self,
        console: &mut C,
        secret: i64,
        style: HintStyle,
    ) -> io::Result<RoundOutcome> {
        let mut range = SearchRange::opening(self.profile.range_size);
        let mut attempts = 0u32;
        let hints = HintStrategyType::for_style(style, &self.profile.hot_cold);

        loop {
            let prompt = format!("Your guess [{}-{}]: ", range.lo(), range.hi());
            let Some(line) = console.ask(&prompt)? else {
                console.say("\nGame interrupted.")?;
                return Ok(RoundOutcome::Interrupted);
            };

            let Ok(guess) = line.trim().parse::<i64>() else {
                console.say("Numbers only, please!")?;
                continue;
            };
            if !range.contains(guess) {
                console.say(&format!("Stay in range {range}."))?;
                continue;
            }
            attempts += 1;

            if let Some(pos) = range.position_of(guess) {
                self.profile.alpha = ALPHA_KEEP * self.profile.alpha + (1.0 - ALPHA_KEEP) * pos;
            }

            let hint = hints.hint(guess, secret, range);
            console.say(&format!("💡 {}", paint(hint)))?;

            if guess == secret {
                let message = format!("🎉 Bang! You got it in {attempts} attempts!");
                console.say(&message.green().bold().to_string())?;

                self.profile.hot_cold.record_game(attempts);
                self.profile.bandit.update_stats(style, attempts);
                self.update_user_stats(attempts);
                info!(%style, attempts, "player won");
                return Ok(RoundOutcome::Won { attempts });
            }

            let narrowed = if guess < secret {
                console.say("Higher.")?;
                range.above(guess)
            } else {
                console.say("Lower.")?;
                range.below(guess)
            };
            match narrowed {
                Ok(next) => range = next,
                Err(e) => return contradiction(console, e, attempts),
            }
        }
    }

    /// Mode 2: the system guesses the player's number using alpha
    ///
    /// Does not train any learner.
    ///
    /// # Errors
    /// Returns console write errors.
    pub fn play_computer_guesses<C: Console>(
        &mut self,
        console: &mut C,
    ) -> io::Result<RoundOutcome> {
        let mut range = SearchRange::opening(self.profile.range_size);
        let mut attempts = 0u32;

        console.say(&format!(
            "\n🤔 Think of a number between {} and {}.",
            range.lo(),
            range.hi()
        ))?;
        console.say(&format!(
            "🧠 I'll try to read your mind using my learned alpha: {:.2}",
            self.profile.alpha
        ))?;
        if console.ask("Press Enter when you're ready...")?.is_none() {
            console.say("\nGame interrupted.")?;
            return Ok(RoundOutcome::Interrupted);
        }

        loop {
            let guess = range.biased_guess(self.profile.alpha);
            attempts += 1;
            console.say(&format!("🤖 My guess #{attempts}: {guess}"))?;

            let answer = loop {
                let Some(line) = console.ask("Is it (h)igher, (l)ower, or (c)orrect? ")? else {
                    console.say("\nGame interrupted.")?;
                    return Ok(RoundOutcome::Interrupted);
                };
                match Answer::parse(&line) {
                    Some(answer) => break answer,
                    None => console.say("Please enter h, l, or c.")?,
                }
            };

            let narrowed = match answer {
                Answer::Correct => {
                    console.say(&format!("🎯 Got it in {attempts} attempts!"))?;
                    info!(attempts, "system guessed the number");
                    return Ok(RoundOutcome::Won { attempts });
                }
                Answer::Higher => range.above(guess).map(|next| ("Higher", next)),
                Answer::Lower => range.below(guess).map(|next| ("Lower", next)),
            };

            match narrowed {
                Ok((direction, next)) => {
                    range = next;
                    console.say(&format!("{direction} than {guess}. Range: {range}"))?;
                }
                Err(e) => return contradiction(console, e, attempts),
            }
        }
    }

    /// Fold a won game into the profile's running stats and resize the range
    pub fn update_user_stats(&mut self, attempts: u32) {
        let attempts = f64::from(attempts);
        let avg = match self.profile.avg_attempts {
            None => attempts,
            Some(prev) => AVG_KEEP * prev + (1.0 - AVG_KEEP) * attempts,
        };
        self.profile.avg_attempts = Some(avg);
        self.profile.games_played = self.profile.games_played.saturating_add(1);

        let size = f64::from(self.profile.range_size);
        if avg < GROW_BELOW {
            self.profile.range_size = ((size * GROW_FACTOR) as u32).min(MAX_RANGE_SIZE);
        } else if avg > SHRINK_ABOVE {
            self.profile.range_size = ((size * SHRINK_FACTOR) as u32).max(MIN_RANGE_SIZE);
        }

        info!(
            avg_attempts = avg,
            games_played = self.profile.games_played,
            range_size = self.profile.range_size,
            "updated player stats"
        );
    }

    /// Print the player's statistics
    ///
    /// # Errors
    /// Returns console write errors.
    pub fn show_stats<C: Console>(&self, console: &mut C) -> io::Result<()> {
        let p = &self.profile;
        console.say(&format!("\n📊 {}'s Stats:", p.username).bold().to_string())?;
        console.say(&format!("   Games played: {}", p.games_played))?;
        match p.avg_attempts {
            Some(avg) => console.say(&format!("   Average attempts: {avg:.1}"))?,
            None => console.say("   Average attempts: N/A")?,
        }
        console.say(&format!("   Current range size: {}", p.range_size))?;
        console.say(&format!("   Alpha (number bias): {:.3}", p.alpha))?;
        console.say(&format!("   Hot/Cold threshold (k): {:.3}", p.hot_cold.k()))?;
        console.say("   Hint style performance:")?;
        for style in p.bandit.styles() {
            if let Some(stats) = p.bandit.stats(style).filter(|s| s.attempts > 0) {
                console.say(&format!(
                    "     {style}: {:.1} attempts ({} games)",
                    stats.avg_attempts, stats.attempts
                ))?;
            }
        }
        Ok(())
    }

    /// Persist the profile, reporting the result to the player
    ///
    /// A failed save is reported and logged but not returned.
    ///
    /// # Errors
    /// Returns console write errors.
    pub fn save_profile<C: Console>(&self, console: &mut C) -> io::Result<bool> {
        match self.profile.save(&self.store) {
            Ok(_) => {
                console.say(&format!("💾 Profile saved for {}", self.profile.username))?;
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "profile save failed");
                console.say(&format!("Couldn't save profile: {e}").red().to_string())?;
                Ok(false)
            }
        }
    }
}

fn contradiction<C: Console>(
    console: &mut C,
    error: RangeError,
    attempts: u32,
) -> io::Result<RoundOutcome> {
    warn!(%error, attempts, "inconsistent answers");
    console.say(&"Something's wrong with the range!".red().to_string())?;
    Ok(RoundOutcome::Contradiction { attempts })
}

fn paint(hint: Hint) -> ColoredString {
    let text = hint.to_string();
    match hint {
        Hint::Higher | Hint::Lower => text.yellow(),
        _ if hint.is_warm() => text.red(),
        _ => text.blue(),
    }
}
