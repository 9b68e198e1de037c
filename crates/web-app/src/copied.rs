use std::collections::BTreeMap;

use exercise_editor_domain::ExerciseID;
use log::debug;

/// Time the copied indicator of an exercise is shown.
pub const COPIED_TIMEOUT_MS: u32 = 5_000;

/// Per-exercise "copied" indicators, each bound to the handle of its expiry timer.
///
/// Dropping a handle must cancel its timer. Copying an exercise again replaces (and thereby
/// cancels) the previous timer of this exercise.
pub struct CopiedIndicator<H> {
    timers: BTreeMap<ExerciseID, (u64, H)>,
    generation: u64,
}

impl<H> CopiedIndicator<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timers: BTreeMap::new(),
            generation: 0,
        }
    }

    /// Token to be passed to `mark` and later to `expire`.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn mark(&mut self, id: ExerciseID, generation: u64, handle: H) {
        if self.timers.insert(id.clone(), (generation, handle)).is_some() {
            debug!("replaced copied indicator timer of {id}");
        }
    }

    /// Remove the indicator if it still belongs to the given generation.
    pub fn expire(&mut self, id: &ExerciseID, generation: u64) {
        if self.timers.get(id).is_some_and(|(g, _)| *g == generation) {
            self.timers.remove(id);
        }
    }

    #[must_use]
    pub fn is_copied(&self, id: &ExerciseID) -> bool {
        self.timers.contains_key(id)
    }
}

impl<H> Default for CopiedIndicator<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    struct Handle(Rc<Cell<bool>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    fn handle() -> (Handle, Rc<Cell<bool>>) {
        let cancelled = Rc::new(Cell::new(false));
        (Handle(cancelled.clone()), cancelled)
    }

    #[test]
    fn test_mark_and_expire() {
        let mut indicator = CopiedIndicator::new();
        let id = ExerciseID::from("0001");
        let (h, _) = handle();
        let generation = indicator.next_generation();

        assert!(!indicator.is_copied(&id));

        indicator.mark(id.clone(), generation, h);

        assert!(indicator.is_copied(&id));
        assert!(!indicator.is_copied(&ExerciseID::from("0002")));

        indicator.expire(&id, generation);

        assert!(!indicator.is_copied(&id));
    }

    #[test]
    fn test_copy_again_cancels_previous_timer() {
        let mut indicator = CopiedIndicator::new();
        let id = ExerciseID::from("0001");
        let (first, first_cancelled) = handle();
        let (second, second_cancelled) = handle();

        let first_generation = indicator.next_generation();
        indicator.mark(id.clone(), first_generation, first);
        let second_generation = indicator.next_generation();
        indicator.mark(id.clone(), second_generation, second);

        assert!(first_cancelled.get());
        assert!(!second_cancelled.get());

        indicator.expire(&id, first_generation);

        assert!(indicator.is_copied(&id));

        indicator.expire(&id, second_generation);

        assert!(!indicator.is_copied(&id));
        assert!(second_cancelled.get());
    }

    #[test]
    fn test_indicators_are_independent() {
        let mut indicator = CopiedIndicator::new();
        let a = ExerciseID::from("0001");
        let b = ExerciseID::from("0002");
        let (h_a, a_cancelled) = handle();
        let (h_b, _) = handle();

        let generation_a = indicator.next_generation();
        indicator.mark(a.clone(), generation_a, h_a);
        let generation_b = indicator.next_generation();
        indicator.mark(b.clone(), generation_b, h_b);

        indicator.expire(&b, generation_b);

        assert!(indicator.is_copied(&a));
        assert!(!indicator.is_copied(&b));
        assert!(!a_cancelled.get());
    }
}
