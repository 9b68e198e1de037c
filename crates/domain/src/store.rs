use log::{debug, error, warn};

use crate::{Clock, Exercise, ExerciseID, ExerciseRepository, ExerciseUpdate, UpdateError};

/// Owner of the canonical catalog.
///
/// Persisted state supersedes the seed catalog entirely. Every update writes the complete
/// catalog.
pub struct RecordStore<R, C> {
    repository: R,
    clock: C,
    seed: Vec<Exercise>,
    exercises: Vec<Exercise>,
}

impl<R: ExerciseRepository, C: Clock> RecordStore<R, C> {
    pub fn new(repository: R, clock: C, seed: Vec<Exercise>) -> Self {
        Self {
            repository,
            clock,
            exercises: seed.clone(),
            seed,
        }
    }

    /// Replace the current catalog by the persisted catalog or, if nothing usable was
    /// persisted, by the seed catalog.
    pub fn load(&mut self) -> &[Exercise] {
        self.exercises = match self.repository.read_exercises() {
            Ok(Some(exercises)) => {
                debug!("loaded {} persisted exercises", exercises.len());
                exercises
            }
            Ok(None) => {
                debug!("no persisted exercises, using seed catalog");
                self.seed.clone()
            }
            Err(err) => {
                warn!("failed to load persisted exercises, using seed catalog: {err}");
                self.seed.clone()
            }
        };
        &self.exercises
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn exercise(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == *id)
    }

    /// Merge `update` into the exercise with the given ID and persist the complete catalog.
    ///
    /// An unknown ID leaves the catalog unchanged, but the catalog is still persisted. If
    /// persisting fails, the in-memory catalog is not modified.
    pub fn update(
        &mut self,
        id: &ExerciseID,
        update: ExerciseUpdate,
    ) -> Result<&[Exercise], UpdateError> {
        let now = self.clock.now();
        let mut exercises = self.exercises.clone();

        match exercises.iter_mut().find(|e| e.id == *id) {
            Some(exercise) => exercise.apply(update, now),
            None => debug!("no exercise with id {id}"),
        }

        if let Err(err) = self.repository.write_exercises(&exercises) {
            error!("failed to persist exercises: {err}");
            return Err(err);
        }

        self.exercises = exercises;
        Ok(&self.exercises)
    }
}
