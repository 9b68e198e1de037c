pub mod exercises;
pub mod not_found;
