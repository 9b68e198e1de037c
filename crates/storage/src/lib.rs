#![warn(clippy::pedantic)]

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
mod model;

#[cfg(test)]
mod tests {
    pub mod data;
}
