//! SeaORM table models
//!
//! Storage-layer records; conversion to domain entities lives with the
//! Postgres adapters.

pub mod books;
pub mod orders;
pub mod users;
