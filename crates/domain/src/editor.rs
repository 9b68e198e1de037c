use log::debug;
use strum::{AsRefStr, EnumString};

use crate::{
    Clock, Exercise, ExerciseID, ExerciseRepository, ExerciseUpdate, RecordStore, UpdateError,
};

const SECONDARY_MUSCLES_SEPARATOR: &str = ", ";

/// Fields of an exercise that are copied into the scratch buffer.
#[derive(AsRefStr, EnumString, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    BodyPart,
    Equipment,
    GifUrl,
    Id,
    Name,
    Target,
    SecondaryMuscles,
    Instructions,
}

/// Working copy of the editable fields of the selected exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchBuffer {
    pub id: ExerciseID,
    pub name: String,
    pub body_part: String,
    pub equipment: String,
    pub target: String,
    pub gif_url: String,
    /// Comma-joined as it is shown in the form.
    pub secondary_muscles: String,
    pub instructions: Vec<String>,
    orig_secondary_muscles: Vec<String>,
}

impl ScratchBuffer {
    fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::BodyPart => raw.clone_into(&mut self.body_part),
            Field::Equipment => raw.clone_into(&mut self.equipment),
            Field::GifUrl => raw.clone_into(&mut self.gif_url),
            Field::Id => self.id = raw.into(),
            Field::Name => raw.clone_into(&mut self.name),
            Field::Target => raw.clone_into(&mut self.target),
            Field::SecondaryMuscles => raw.clone_into(&mut self.secondary_muscles),
            Field::Instructions => {
                self.instructions = raw.split('\n').map(str::to_string).collect();
            }
        }
    }

    /// Secondary muscles as a sequence.
    ///
    /// The original sequence is kept as long as the comma-joined text has not been changed.
    #[must_use]
    pub fn secondary_muscles_list(&self) -> Vec<String> {
        if self.secondary_muscles == self.orig_secondary_muscles.join(SECONDARY_MUSCLES_SEPARATOR)
        {
            return self.orig_secondary_muscles.clone();
        }
        self.secondary_muscles
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn to_update(&self) -> ExerciseUpdate {
        ExerciseUpdate {
            name: Some(self.name.clone()),
            body_part: Some(self.body_part.clone()),
            equipment: Some(self.equipment.clone()),
            target: Some(self.target.clone()),
            secondary_muscles: Some(self.secondary_muscles_list()),
            instructions: Some(self.instructions.clone()),
            gif_url: Some(self.gif_url.clone()),
        }
    }

    /// Whether the buffer differs from the given exercise.
    #[must_use]
    pub fn differs_from(&self, exercise: &Exercise) -> bool {
        *self != ScratchBuffer::from(exercise)
    }
}

impl From<&Exercise> for ScratchBuffer {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id.clone(),
            name: exercise.name.clone(),
            body_part: exercise.body_part.clone(),
            equipment: exercise.equipment.clone(),
            target: exercise.target.clone(),
            gif_url: exercise.gif_url.clone(),
            secondary_muscles: exercise
                .secondary_muscles
                .join(SECONDARY_MUSCLES_SEPARATOR),
            instructions: exercise.instructions.clone(),
            orig_secondary_muscles: exercise.secondary_muscles.clone(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum Selection {
    #[default]
    Idle,
    Editing(ScratchBuffer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    NothingSelected,
    Saved,
}

/// Selection and edit state machine.
///
/// A new selection always replaces the scratch buffer, unsaved changes are discarded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Editor {
    selection: Selection,
}

impl Editor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, exercise: &Exercise) {
        debug!("select exercise {}", exercise.id);
        self.selection = Selection::Editing(exercise.into());
    }

    /// Ignored if nothing is selected.
    pub fn change_field(&mut self, field: Field, raw: &str) {
        match &mut self.selection {
            Selection::Editing(scratch) => scratch.set(field, raw),
            Selection::Idle => debug!("ignore change of {} without selection", field.as_ref()),
        }
    }

    /// Persist the scratch buffer and reselect the updated exercise.
    pub fn submit<R: ExerciseRepository, C: Clock>(
        &mut self,
        store: &mut RecordStore<R, C>,
    ) -> Result<Submission, UpdateError> {
        let Selection::Editing(scratch) = &self.selection else {
            return Ok(Submission::NothingSelected);
        };
        if scratch.id.is_empty() {
            return Ok(Submission::NothingSelected);
        }

        let id = scratch.id.clone();
        store.update(&id, scratch.to_update())?;

        if let Some(exercise) = store.exercise(&id) {
            self.select(exercise);
        }

        Ok(Submission::Saved)
    }

    #[must_use]
    pub fn scratch(&self) -> Option<&ScratchBuffer> {
        match &self.selection {
            Selection::Editing(scratch) => Some(scratch),
            Selection::Idle => None,
        }
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&ExerciseID> {
        self.scratch().map(|scratch| &scratch.id)
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.selection, Selection::Editing(_))
    }

    /// Whether the scratch buffer contains unsaved changes compared to the stored exercise.
    #[must_use]
    pub fn has_changes<R: ExerciseRepository, C: Clock>(&self, store: &RecordStore<R, C>) -> bool {
        self.scratch().is_some_and(|scratch| {
            store
                .exercise(&scratch.id)
                .is_none_or(|exercise| scratch.differs_from(exercise))
        })
    }
}
