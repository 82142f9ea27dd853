//! Mailcaster library.
//!
//! A terminal client for a mass-mail campaign backend: pick campaigns,
//! compose an HTML email with attachments, manage reusable templates, and
//! submit everything to the server's composer endpoint.
//!
//! Modules:
//! - [`api`]: reqwest client and wire types for the backend
//! - [`compose`]: draft state and pre-send validation
//! - [`config`]: TOML configuration with environment override
//! - [`ui`]: the ratatui component tree and event loop
//! - [`validation`]: email and list-input helpers

pub mod api;
pub mod compose;
pub mod config;
pub mod constants;
pub mod logger;
pub mod ui;
pub mod validation;
