// ABOUTME: HTTP route handler modules
// ABOUTME: One module per surface - cards, OAuth, and health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP route handlers

/// Card definition route
pub mod cards;

/// Health probe route
pub mod health;

/// OAuth initiation and callback routes
pub mod oauth;
