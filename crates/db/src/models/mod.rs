//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct decoded from a stored document
//! - A `Deserialize` create DTO
//! - A `Deserialize` update DTO

pub mod category;
pub mod tool;
