// ABOUTME: The fixed card catalog served to the CRM
// ABOUTME: Builds the detailed and compact card descriptors returned verbatim by the card route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Fixed card definitions
//!
//! The card route returns one of two pre-defined payloads, selected by the
//! configured card profile. The content is immutable and independent of the
//! incoming request.

use crate::config::environment::CardProfile;
use crate::constants::cards;
use crate::models::{
    ActionType, CardAction, CardDescriptor, CardProperty, CardResponse, HttpMethod,
    PropertyDataType,
};

/// Placeholder object id; HubSpot overrides it with the context object
const SAMPLE_OBJECT_ID: u64 = 123;

/// Full card definition with a display property and a button action
#[must_use]
pub fn detailed_card() -> CardResponse {
    CardResponse {
        results: vec![CardDescriptor {
            object_id: SAMPLE_OBJECT_ID,
            title: "Sample card with button".into(),
            properties: vec![CardProperty {
                label: "Description".into(),
                data_type: PropertyDataType::String,
                value: "This is a custom card with a simple button.".into(),
            }],
            actions: vec![CardAction {
                action_type: ActionType::ActionHook,
                http_method: HttpMethod::Post,
                uri: cards::BUTTON_ACTION_URI.into(),
                label: "Click me!".into(),
                associated_object_properties: vec!["firstname".into(), "lastname".into()],
            }],
        }],
    }
}

/// Action-only card definition pointing at the fixed webhook
#[must_use]
pub fn compact_card() -> CardResponse {
    CardResponse {
        results: vec![CardDescriptor {
            object_id: SAMPLE_OBJECT_ID,
            title: "Sample card".into(),
            properties: vec![],
            actions: vec![CardAction {
                action_type: ActionType::ActionHook,
                http_method: HttpMethod::Post,
                uri: cards::BUTTON_ACTION_URI.into(),
                label: "Click me!".into(),
                associated_object_properties: vec![],
            }],
        }],
    }
}

/// The payload served for a given card profile
#[must_use]
pub fn card_for_profile(profile: CardProfile) -> CardResponse {
    match profile {
        CardProfile::Detailed => detailed_card(),
        CardProfile::Compact => compact_card(),
    }
}
