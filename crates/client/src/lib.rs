//! Zendesk REST API client.
//!
//! This crate provides a type-safe client for the Zendesk Support API v2,
//! covering the resources managed by the provider crate: macros, ticket
//! forms, user and organization fields, views, trigger categories and
//! dynamic content items with their variants.
//!
//! Requests and responses are plain JSON over HTTPS with basic
//! authentication. The client performs exactly one attempt per call;
//! retry and rate-limit policy belong to the embedding host.

mod auth;
pub mod client;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::builder::ZendeskClientBuilder;
pub use client::{ListOptions, MacroListOptions, TicketFormListOptions, ZendeskClient};
pub use error::{ClientError, Result};
pub use models::{
    ActionValue, AgentCondition, ChildField, ColumnKey, CustomFieldOption, DynamicContentItem,
    DynamicContentItemWrite, DynamicContentVariant, DynamicContentVariantWrite, FieldType, Macro,
    MacroAction, OrganizationField, Page, RequiredOnStatuses, Restriction, StatusRequirement,
    TicketForm, TriggerCategory, UserField, View, ViewColumn, ViewCondition, ViewConditions,
    ViewExecution, ViewOutput, ViewWrite,
};
