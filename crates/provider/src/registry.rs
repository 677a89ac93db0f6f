//! Resource registration and lifecycle dispatch.
//!
//! Every resource kind registers a [`Resource`]: its type name, declared
//! schema and four lifecycle hooks. The client handle is passed explicitly
//! into every hook; there is no ambient context value. The wrapper methods
//! run schema defaulting and validation ahead of Create and Update, and
//! adapt hook results into host-facing [`Diagnostics`].

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::ZendeskClient;

use crate::data::ResourceData;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::resources;
use crate::schema::Schema;

/// A lifecycle hook: one unmarshal → network call → marshal chain.
pub type Handler =
    for<'a> fn(&'a ZendeskClient, &'a mut dyn ResourceData) -> BoxFuture<'a, Result<()>>;

/// One registered resource kind.
pub struct Resource {
    pub type_name: &'static str,
    pub schema: Schema,
    pub create: Handler,
    pub read: Handler,
    pub update: Handler,
    pub delete: Handler,
}

impl Resource {
    /// Create the remote resource from configuration and record its id.
    pub async fn create(&self, client: &ZendeskClient, data: &mut dyn ResourceData) -> Diagnostics {
        debug!("Creating {}", self.type_name);
        if let Err(err) = self.prepare(data) {
            return err.into();
        }
        Self::run((self.create)(client, data).await)
    }

    /// Refresh configuration from the remote state.
    pub async fn read(&self, client: &ZendeskClient, data: &mut dyn ResourceData) -> Diagnostics {
        debug!("Reading {} {}", self.type_name, data.id());
        Self::run((self.read)(client, data).await)
    }

    /// Push the full configuration state to the remote resource.
    pub async fn update(&self, client: &ZendeskClient, data: &mut dyn ResourceData) -> Diagnostics {
        debug!("Updating {} {}", self.type_name, data.id());
        if let Err(err) = self.prepare(data) {
            return err.into();
        }
        Self::run((self.update)(client, data).await)
    }

    /// Delete the remote resource.
    pub async fn delete(&self, client: &ZendeskClient, data: &mut dyn ResourceData) -> Diagnostics {
        debug!("Deleting {} {}", self.type_name, data.id());
        Self::run((self.delete)(client, data).await)
    }

    fn prepare(&self, data: &mut dyn ResourceData) -> Result<()> {
        self.schema.apply_defaults(data)?;
        self.schema.validate(data)
    }

    fn run(result: Result<()>) -> Diagnostics {
        match result {
            Ok(()) => Diagnostics::ok(),
            Err(err) => err.into(),
        }
    }
}

/// The full set of resource registrations.
pub struct Provider {
    resources: Vec<Resource>,
}

impl Provider {
    pub fn new() -> Self {
        Self {
            resources: resources::all(),
        }
    }

    /// Look up a registration by its configuration type name.
    pub fn resource(&self, type_name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.type_name == type_name)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryResourceData;
    use secrecy::SecretString;
    use zendesk_client::Credentials;

    fn offline_client() -> ZendeskClient {
        ZendeskClient::builder()
            .base_url("http://127.0.0.1:9")
            .credentials(Credentials::ApiToken {
                email: "agent@example.com".to_string(),
                token: SecretString::new("test-token".to_string().into()),
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_all_eight_resources_registered() {
        let provider = Provider::new();
        let expected = [
            "zendesk_macro",
            "zendesk_ticket_form",
            "zendesk_user_field",
            "zendesk_organization_field",
            "zendesk_view",
            "zendesk_trigger_category",
            "zendesk_dynamic_content",
            "zendesk_dynamic_content_variant",
        ];
        assert_eq!(provider.resources().len(), expected.len());
        for name in expected {
            assert!(provider.resource(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn test_type_names_are_unique() {
        let provider = Provider::new();
        let mut names: Vec<_> = provider.resources().iter().map(|r| r.type_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), provider.resources().len());
    }

    #[tokio::test]
    async fn test_create_validates_before_dispatching() {
        let provider = Provider::new();
        let resource = provider.resource("zendesk_macro").unwrap();
        let client = offline_client();

        // missing required title and action; must fail locally, so the
        // unroutable client address is never contacted
        let mut data = InMemoryResourceData::new();
        let diags = resource.create(&client, &mut data).await;
        assert!(diags.has_errors());
        assert_eq!(diags.first().unwrap().summary, "Invalid configuration");
    }

    #[tokio::test]
    async fn test_create_fills_defaults_before_validation() {
        let provider = Provider::new();
        let resource = provider.resource("zendesk_trigger_category").unwrap();
        let client = offline_client();

        let mut data = InMemoryResourceData::new();
        data.insert("position", -3i64);
        data.insert("name", "Notifications");
        let diags = resource.create(&client, &mut data).await;
        // position floor is 0 for trigger categories
        assert!(diags.has_errors());
        assert!(
            diags
                .first()
                .unwrap()
                .detail
                .as_deref()
                .unwrap()
                .contains("at least 0")
        );
    }
}
