use std::collections::VecDeque;

use exercise_editor_domain as domain;
use exercise_editor_web_app::log;
use gloo_storage::{Storage as GlooStorage, errors::StorageError};

use crate::model;

/// Browser-local storage of the catalog and the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

const KEY_EXERCISES: &str = "exercises";
const KEY_LOG: &str = "log";

impl domain::ExerciseRepository for LocalStorage {
    fn read_exercises(&self) -> Result<Option<Vec<domain::Exercise>>, domain::ReadError> {
        match gloo_storage::LocalStorage::get::<Vec<model::Exercise>>(KEY_EXERCISES) {
            Ok(exercises) => Ok(Some(
                exercises.into_iter().map(domain::Exercise::from).collect(),
            )),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(err)) => Err(domain::ReadError::Malformed(err.to_string())),
            Err(err) => Err(domain::StorageError::Other(err.to_string().into()).into()),
        }
    }

    fn write_exercises(&self, exercises: &[domain::Exercise]) -> Result<(), domain::UpdateError> {
        ::log::debug!("persist {} exercises", exercises.len());
        gloo_storage::LocalStorage::set(
            KEY_EXERCISES,
            exercises
                .iter()
                .map(model::Exercise::from)
                .collect::<Vec<_>>(),
        )
        .map_err(|err| domain::StorageError::Other(err.to_string().into()).into())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
