use chrono::{DateTime, Utc};
use exercise_editor_domain as domain;

/// Wall clock of the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl domain::Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
