//! Data models for Zendesk API payloads.
//!
//! This module provides types for serializing and deserializing Zendesk
//! Support API JSON. Types are organized by resource in submodules and
//! re-exported here for convenient access.
//!
//! Fields with more than one wire representation (column ids, macro action
//! values, restriction objects, error payloads) are modelled as enums with
//! one arm per representation rather than as raw JSON values.

pub mod common;
pub mod dynamic_content;
pub mod macros;
pub mod organization_fields;
pub mod ticket_forms;
pub mod trigger_categories;
pub mod user_fields;
pub mod views;

pub use common::{ErrorBody, ErrorDetail, Page, Restriction};
pub use dynamic_content::{
    DynamicContentItem, DynamicContentItemWrite, DynamicContentVariant, DynamicContentVariantWrite,
};
pub use macros::{ActionValue, Macro, MacroAction};
pub use organization_fields::OrganizationField;
pub use ticket_forms::{AgentCondition, ChildField, RequiredOnStatuses, StatusRequirement, TicketForm};
pub use trigger_categories::TriggerCategory;
pub use user_fields::{CustomFieldOption, FieldType, UserField};
pub use views::{ColumnKey, View, ViewColumn, ViewCondition, ViewConditions, ViewExecution, ViewOutput, ViewWrite};
