//! Domain types shared by the store, repository and HTTP layers.

pub mod category;
pub mod error;
pub mod limits;
pub mod submission;
pub mod tool;
pub mod types;
