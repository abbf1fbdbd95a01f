//! campusd - a self-hostable college management backend
//!
//! JSON-over-HTTP API for authentication, student and teacher records,
//! exam rooms, and exam scheduling with per-room availability queries.

pub mod auth;
pub mod cli;
pub mod config;
pub mod http;
pub mod observability;
pub mod registry;
pub mod scheduling;
