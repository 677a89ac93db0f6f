//! Configuration-driven management of Zendesk Support resources.
//!
//! This crate maps flat configuration attributes onto the Zendesk REST API
//! via [`zendesk_client`]. Eight resource kinds are registered: macros,
//! ticket forms, user and organization fields, views, trigger categories,
//! and dynamic content items with their variants.
//!
//! Each registration bundles a declared [`Schema`] with four lifecycle
//! hooks. Hooks receive the client handle and a [`ResourceData`] accessor
//! explicitly; Create and Update run schema defaulting and validation
//! before the hook dispatches, so malformed configuration never produces a
//! request. Hook failures surface as host-facing [`Diagnostics`].

pub mod data;
pub mod diagnostics;
pub mod error;
pub mod registry;
pub mod resources;
pub mod schema;

pub use data::{AttrValue, InMemoryResourceData, ResourceData};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{ProviderError, Result};
pub use registry::{Handler, Provider, Resource};
pub use schema::{AttrKind, Attribute, Constraint, Schema};

pub use zendesk_client::{Credentials, ZendeskClient, ZendeskClientBuilder};
