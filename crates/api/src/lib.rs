//! Toolshelf API server library.
//!
//! Exposes the core building blocks (config, state, error handling, page
//! controllers, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod controllers;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
