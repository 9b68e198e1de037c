pub mod element;
pub mod form;
