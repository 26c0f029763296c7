pub mod catalog;
pub mod models;
pub mod pitch;
pub mod selection;
