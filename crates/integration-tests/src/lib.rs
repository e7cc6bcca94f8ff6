//! Integration tests for Gilded Hamper.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gilded-hamper-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_session` - Full session lifecycle against a mock content
//!   delivery server: catalog load, cart, customizer, checkout handoff
//!
//! The content delivery API is mocked with `wiremock`; no test talks to a
//! live content space.

use secrecy::SecretString;

use gilded_hamper_storefront::config::ContentfulConfig;

/// Install a test tracing subscriber once per process.
///
/// Subsequent calls are no-ops; output goes through the libtest capture
/// writer so it only shows for failing tests.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gilded_hamper_storefront=debug".into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Delivery credentials pointing at a mock server space.
#[must_use]
pub fn test_contentful_config(space_id: &str) -> ContentfulConfig {
    ContentfulConfig {
        space_id: space_id.to_owned(),
        access_token: SecretString::from("test-token"),
    }
}
