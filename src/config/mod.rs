// ABOUTME: Configuration module for environment-based settings
// ABOUTME: Exposes the server configuration loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration management

/// Environment-based configuration parsing
pub mod environment;
