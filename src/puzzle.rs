//! Mission 1, "The Scramble": recover an intercepted rail fence message.
//!
//! The player picks a rail count, inspects the fence, and submits a guess. A
//! tutor or any other collaborator hears about each submission through a
//! [`PuzzleObserver`] rather than a global event.

use crate::error::{Error, Result};
use crate::{FenceMatrix, build_visualization_matrix, decrypt};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::RangeInclusive;

/// Rail counts the player may choose from.
pub const DEFAULT_RAIL_RANGE: RangeInclusive<usize> = 2..=6;

/// A puzzle's fixed data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mission {
    /// Intercepted message shown to the player
    pub ciphertext: String,
    /// Expected plaintext, uppercase without whitespace
    pub solution: String,
    /// Rail count that recovers the solution
    pub correct_rails: usize,
    /// Rail counts offered to the player
    pub rail_range: RangeInclusive<usize>,
}

impl Default for Mission {
    fn default() -> Self {
        Self {
            ciphertext: String::from("DNETEEDHFRFTO"), // DEFEND THE FORT (3 rails)
            solution: String::from("DEFENDTHEFORT"),
            correct_rails: 3,
            rail_range: DEFAULT_RAIL_RANGE,
        }
    }
}

impl Mission {
    /// Checks that the mission is solvable with its own answer key.
    pub fn validate(&self) -> Result<()> {
        check_range(&self.rail_range, self.correct_rails)?;
        let recovered = decrypt(&self.ciphertext, self.correct_rails);
        if normalize_guess(&recovered) != normalize_guess(&self.solution) {
            return Err(Error::InconsistentMission {
                rails: self.correct_rails,
            });
        }
        Ok(())
    }
}

fn check_range(range: &RangeInclusive<usize>, rails: usize) -> Result<()> {
    if !range.contains(&rails) {
        return Err(Error::RailsOutOfRange {
            rails,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Uppercases a guess and strips all whitespace.
pub fn normalize_guess(guess: &str) -> String {
    guess
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Where the player is in the mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Briefing,
    Decrypt,
    Success,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Briefing => write!(f, "briefing"),
            Self::Decrypt => write!(f, "decrypt"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// Outcome of one submitted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    pub success: bool,
    /// Failed attempts so far, including this one when it failed
    pub attempts: u32,
}

/// Receives every submission a [`Puzzle`] evaluates.
pub trait PuzzleObserver {
    fn on_submission(&mut self, submission: &Submission);
}

impl<F: FnMut(&Submission)> PuzzleObserver for F {
    fn on_submission(&mut self, submission: &Submission) {
        self(submission)
    }
}

/// Mission 1 state machine: `Briefing` → `Decrypt` → `Success`.
pub struct Puzzle {
    mission: Mission,
    stage: Stage,
    selected: usize,
    attempts: u32,
    observers: Vec<Box<dyn PuzzleObserver>>,
}

impl Puzzle {
    pub fn new(mission: Mission) -> Result<Self> {
        mission.validate()?;
        let selected = *mission.rail_range.start();
        Ok(Self {
            mission,
            stage: Stage::Briefing,
            selected,
            attempts: 0,
            observers: Vec::new(),
        })
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn selected_rails(&self) -> usize {
        self.selected
    }

    pub fn observe(&mut self, observer: impl PuzzleObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Leaves the briefing and starts the decryption stage.
    pub fn begin(&mut self) -> Result<()> {
        if self.stage != Stage::Briefing {
            return Err(Error::WrongStage {
                action: "begin",
                stage: self.stage,
            });
        }
        tracing::debug!(ciphertext = %self.mission.ciphertext, "mission started");
        self.stage = Stage::Decrypt;
        Ok(())
    }

    /// Moves the rail slider; only available while decrypting.
    pub fn select_rails(&mut self, rails: usize) -> Result<()> {
        if self.stage != Stage::Decrypt {
            return Err(Error::WrongStage {
                action: "select rails",
                stage: self.stage,
            });
        }
        check_range(&self.mission.rail_range, rails)?;
        self.selected = rails;
        Ok(())
    }

    /// The intercepted message laid out on the currently selected fence.
    pub fn matrix(&self) -> FenceMatrix<char> {
        build_visualization_matrix(&self.mission.ciphertext, self.selected)
    }

    /// The message as it reads with the currently selected rail count.
    pub fn preview(&self) -> String {
        decrypt(&self.mission.ciphertext, self.selected)
    }

    /// Every rail count the player can try, with the text it produces.
    pub fn candidates(&self) -> Vec<(usize, String)> {
        self.mission
            .rail_range
            .clone()
            .map(|rails| (rails, decrypt(&self.mission.ciphertext, rails)))
            .collect()
    }

    /// Checks a guess against the solution and notifies observers.
    pub fn submit(&mut self, guess: &str) -> Result<Submission> {
        if self.stage != Stage::Decrypt {
            return Err(Error::WrongStage {
                action: "submit a guess",
                stage: self.stage,
            });
        }

        let success = normalize_guess(guess) == normalize_guess(&self.mission.solution);
        if success {
            tracing::info!(attempts = self.attempts, "mission solved");
            self.stage = Stage::Success;
        } else {
            self.attempts += 1;
            tracing::debug!(attempts = self.attempts, "incorrect decryption");
        }

        let submission = Submission {
            success,
            attempts: self.attempts,
        };
        for observer in &mut self.observers {
            observer.on_submission(&submission);
        }
        Ok(submission)
    }
}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Puzzle")
            .field("mission", &self.mission)
            .field("stage", &self.stage)
            .field("selected", &self.selected)
            .field("attempts", &self.attempts)
            .field("observers", &self.observers.len())
            .finish()
    }
}
