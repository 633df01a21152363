//! API layer shared between route handlers.

pub mod common;
