// ABOUTME: Application constants organized by domain
// ABOUTME: Ports, HubSpot endpoint URLs, OAuth scopes, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Application constants grouped into logical domains.

/// Network port defaults
pub mod ports {
    /// Default HTTP server port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
}

/// OAuth endpoint URLs and defaults for HubSpot
pub mod oauth {
    use std::time::Duration;

    /// HubSpot user-consent authorization endpoint
    pub const HUBSPOT_AUTH_URL: &str = "https://app.hubspot.com/oauth/authorize";

    /// HubSpot token exchange endpoint
    pub const HUBSPOT_TOKEN_URL: &str = "https://api.hubapi.com/oauth/v1/token";

    /// Default scopes requested during authorization
    pub const HUBSPOT_DEFAULT_SCOPES: &str = "crm.objects.contacts.read crm.objects.contacts.write crm.objects.deals.read crm.objects.deals.write oauth";

    /// Upper bound on the outbound token exchange call
    pub const TOKEN_EXCHANGE_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Card catalog fixed values
pub mod cards {
    /// Action hook endpoint invoked when a user clicks the card button
    pub const BUTTON_ACTION_URI: &str = "https://example.com/api/button-action";
}

/// Service identity for logs and health responses
pub mod service_names {
    /// Canonical service name
    pub const HUBCARD_SERVER: &str = "hubcard-server";
}
