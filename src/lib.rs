// src/lib.rs

//! Video Search Library
//!
//! Finds the most viewed YouTube videos matching a search term within a
//! recent window and returns them with engagement statistics.

pub mod config;
pub mod error;
pub mod lambda;
pub mod logging;
pub mod models;
pub mod secrets;
pub mod services;
pub mod utils;
