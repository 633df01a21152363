//! Collection of general utility functions shared across the backend.

pub mod jwt;
pub mod password;
