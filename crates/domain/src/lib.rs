#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod editor;
mod error;
mod exercise;
mod filter;
mod media;
mod store;

pub use editor::{Editor, Field, ScratchBuffer, Submission};
pub use error::{ReadError, StorageError, UpdateError};
pub use exercise::{Clock, Exercise, ExerciseID, ExerciseRepository, ExerciseUpdate};
pub use filter::{ExerciseFilter, filter};
pub use media::Media;
pub use store::RecordStore;
