//! Configuration modules for the Coursedeck API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with sensible development defaults. The assembled
//! configs live in [`crate::state::AppState`]; nothing reads the environment
//! after startup.
//!
//! # Modules
//!
//! - [`cors`]: CORS allowed origins
//! - [`database`]: PostgreSQL connection pool settings
//! - [`email`]: SMTP settings for transactional email
//! - [`jwt`]: Identity-token signing configuration
//! - [`server`]: Bind address
//! - [`storage`]: Media upload directory and limits

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
pub mod server;
pub mod storage;
