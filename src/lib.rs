// ABOUTME: Main library entry point for the HubSpot card backend
// ABOUTME: Serves CRM custom card definitions and runs the OAuth2 authorization-code exchange
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # HubSpot Card Server
//!
//! A small HTTP backend for a HubSpot CRM integration. It serves the static
//! JSON definition of a CRM "custom card" and implements the OAuth 2.0
//! authorization-code exchange against HubSpot's OAuth endpoint.
//!
//! ## Architecture
//!
//! - **Models**: wire types for card descriptors and OAuth tokens
//! - **Cards**: the fixed card catalog returned by the card route
//! - **`OAuth`**: authorization URL construction and the single-shot token
//!   exchange, behind a provider trait so the exchange can be substituted in
//!   tests
//! - **Routes**: axum handlers for the card, OAuth, and health endpoints
//! - **Config**: environment-based configuration loaded once at startup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hubcard_server::config::environment::ServerConfig;
//! use hubcard_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("HubSpot card server configured with port: {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// The fixed card catalog served to HubSpot
pub mod cards;

/// Configuration management from environment variables
pub mod config;

/// Application constants and endpoint URLs
pub mod constants;

/// Unified error handling with HTTP response formatting
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Data structures for card descriptors and OAuth tokens
pub mod models;

/// OAuth2 authorization-code exchange against HubSpot
pub mod oauth;

/// HTTP route handlers
pub mod routes;

/// Shared server resources and listener startup
pub mod server;
