//! Grade calculator API server library.
//!
//! Exposes the building blocks (config, router, routes, page rendering) so
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod page;
pub mod router;
pub mod routes;
