use chrono::{DateTime, Utc};
use derive_more::{AsRef, Deref, Display};

use crate::{ReadError, UpdateError};

/// Persistence of the complete catalog.
///
/// Reads and writes always cover the whole catalog, there is no partial write.
pub trait ExerciseRepository {
    /// Returns `None` if no catalog has been persisted yet.
    fn read_exercises(&self) -> Result<Option<Vec<Exercise>>, ReadError>;
    fn write_exercises(&self, exercises: &[Exercise]) -> Result<(), UpdateError>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub body_part: String,
    pub equipment: String,
    pub target: String,
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
    pub gif_url: String,
    pub updated: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Exercise {
    /// Shallow merge of `update` into the exercise.
    ///
    /// The edit marker and the timestamp are set even if `update` contains no changes.
    pub fn apply(&mut self, update: ExerciseUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(body_part) = update.body_part {
            self.body_part = body_part;
        }
        if let Some(equipment) = update.equipment {
            self.equipment = equipment;
        }
        if let Some(target) = update.target {
            self.target = target;
        }
        if let Some(secondary_muscles) = update.secondary_muscles {
            self.secondary_muscles = secondary_muscles;
        }
        if let Some(instructions) = update.instructions {
            self.instructions = instructions;
        }
        if let Some(gif_url) = update.gif_url {
            self.gif_url = gif_url;
        }
        self.updated = true;
        self.updated_at = Some(now);
    }
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Fields to be merged into an exercise, `None` leaves a field untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseUpdate {
    pub name: Option<String>,
    pub body_part: Option<String>,
    pub equipment: Option<String>,
    pub target: Option<String>,
    pub secondary_muscles: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub gif_url: Option<String>,
}
