// ABOUTME: Wire data structures for HubSpot CRM card descriptors
// ABOUTME: Serializes to the camelCase JSON shape the CRM card renderer expects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Card descriptor data model
//!
//! These types mirror the JSON structure HubSpot expects when fetching a
//! custom card definition: a `results` envelope containing descriptors with
//! display properties and clickable actions.

use serde::{Deserialize, Serialize};

/// Envelope for card descriptors as fetched by the CRM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    /// Card descriptors rendered by the host platform
    pub results: Vec<CardDescriptor>,
}

/// A single custom card definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDescriptor {
    /// Card object identifier; HubSpot normally overrides this with the
    /// context object
    pub object_id: u64,
    /// Card title shown in the CRM sidebar
    pub title: String,
    /// Display properties rendered on the card
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<CardProperty>,
    /// Clickable actions attached to the card
    pub actions: Vec<CardAction>,
}

/// A labeled display property on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProperty {
    /// Property label
    pub label: String,
    /// Property value type
    pub data_type: PropertyDataType,
    /// Rendered value
    pub value: String,
}

/// Value types HubSpot renders on card properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyDataType {
    /// Free-form text
    String,
    /// Numeric value
    Number,
    /// Date value
    Date,
}

/// A clickable action declared on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAction {
    /// Action kind
    #[serde(rename = "type")]
    pub action_type: ActionType,
    /// HTTP method the host platform uses when invoking the hook
    pub http_method: HttpMethod,
    /// Hook endpoint invoked on click
    pub uri: String,
    /// Button label
    pub label: String,
    /// Object properties the platform loads and posts with the hook call
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated_object_properties: Vec<String>,
}

/// Card action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Server-side hook invoked by the host platform on click
    ActionHook,
}

/// HTTP methods usable in card actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET hook
    Get,
    /// POST hook
    Post,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_action_wire_names() {
        let action = CardAction {
            action_type: ActionType::ActionHook,
            http_method: HttpMethod::Post,
            uri: "https://example.com/hook".into(),
            label: "Click".into(),
            associated_object_properties: vec!["firstname".into()],
        };

        let json = serde_json::to_value(&action).unwrap_or_default();
        assert_eq!(json["type"], "ACTION_HOOK");
        assert_eq!(json["httpMethod"], "POST");
        assert_eq!(json["associatedObjectProperties"][0], "firstname");
    }

    #[test]
    fn test_empty_properties_omitted() {
        let descriptor = CardDescriptor {
            object_id: 1,
            title: "t".into(),
            properties: vec![],
            actions: vec![],
        };

        let json = serde_json::to_value(&descriptor).unwrap_or_default();
        assert!(json.get("properties").is_none());
        assert_eq!(json["objectId"], 1);
    }
}
