//! FitTrack server library
//!
//! This library exposes the server modules for use in tests and the binary.

pub mod auth;
pub mod config;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
