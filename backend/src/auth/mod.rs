//! Authentication module for managing user accounts and sessions.
//!
//! This module provides the public interface for signup, login, logout with
//! token revocation, profile retrieval, and the authorization middleware.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
