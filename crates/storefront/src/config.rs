//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Content delivery (optional as a pair)
//! - `CONTENTFUL_SPACE_ID` - Content space identifier
//! - `CONTENTFUL_ACCESS_TOKEN` - Content delivery access token
//!
//! When either is absent the content client is unconfigured and every
//! content operation short-circuits to an unavailable outcome; the
//! storefront then renders with empty catalog sections.
//!
//! ## Optional
//! - `WHATSAPP_NUMBER` - Enquiry handoff number, digits only (default: 919999999999)
//! - `INSTAGRAM_URL` - Social profile link (hardcoded fallback)
//! - `CONTENTFUL_HOME_ENTRY_ID` - Hero section entry (hero skipped when absent)
//! - `CONTENTFUL_GALLERY_ENTRY_ID` - Gallery entry (falls back to asset search)
//! - `CONTENTFUL_GALLERY_QUERY` - Asset search term for the gallery fallback
//! - `CONTENTFUL_BYO_ENTRY_ID` - Customizer option list entry (hardcoded fallback)

use gilded_hamper_core::EntryId;
use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_WHATSAPP_NUMBER: &str = "919999999999";
const DEFAULT_INSTAGRAM_URL: &str = "https://www.instagram.com/gildedhamper";
const DEFAULT_GALLERY_QUERY: &str = "GalleryImage";
const DEFAULT_CUSTOMIZER_ENTRY_ID: &str = "2YEekw2foFyhgBm4zEgPhj";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Content delivery credentials; `None` leaves every content section empty
    pub contentful: Option<ContentfulConfig>,
    /// WhatsApp number receiving checkout enquiries (digits only)
    pub whatsapp_number: String,
    /// Outbound social profile link
    pub instagram_url: String,
    /// Entry carrying the hero section copy and image
    pub home_entry_id: Option<EntryId>,
    /// Entry carrying the gallery image list
    pub gallery_entry_id: Option<EntryId>,
    /// Asset search term used when no gallery entry is configured
    pub gallery_query: String,
    /// Entry carrying the customizer base/add-on option lists
    pub customizer_entry_id: EntryId,
}

/// Content delivery API credentials.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ContentfulConfig {
    /// Content space identifier
    pub space_id: String,
    /// Content delivery access token (sent as a query parameter)
    pub access_token: SecretString,
}

impl std::fmt::Debug for ContentfulConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentfulConfig")
            .field("space_id", &self.space_id)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable is optional; absent values fall back to the defaults above.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `WHATSAPP_NUMBER` is present but not a plain
    /// digit string (the deep link format requires a bare number).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let whatsapp_number = get_env_or_default("WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER);
        validate_whatsapp_number(&whatsapp_number, "WHATSAPP_NUMBER")?;

        Ok(Self {
            contentful: ContentfulConfig::from_env(),
            whatsapp_number,
            instagram_url: get_env_or_default("INSTAGRAM_URL", DEFAULT_INSTAGRAM_URL),
            home_entry_id: get_optional_env("CONTENTFUL_HOME_ENTRY_ID").map(EntryId::new),
            gallery_entry_id: get_optional_env("CONTENTFUL_GALLERY_ENTRY_ID").map(EntryId::new),
            gallery_query: get_env_or_default("CONTENTFUL_GALLERY_QUERY", DEFAULT_GALLERY_QUERY),
            customizer_entry_id: EntryId::new(get_env_or_default(
                "CONTENTFUL_BYO_ENTRY_ID",
                DEFAULT_CUSTOMIZER_ENTRY_ID,
            )),
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            contentful: None,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_owned(),
            instagram_url: DEFAULT_INSTAGRAM_URL.to_owned(),
            home_entry_id: None,
            gallery_entry_id: None,
            gallery_query: DEFAULT_GALLERY_QUERY.to_owned(),
            customizer_entry_id: EntryId::new(DEFAULT_CUSTOMIZER_ENTRY_ID),
        }
    }
}

impl ContentfulConfig {
    /// Load credentials from the environment, or `None` when incomplete.
    fn from_env() -> Option<Self> {
        let space_id = get_optional_env("CONTENTFUL_SPACE_ID")?;
        let access_token = get_optional_env("CONTENTFUL_ACCESS_TOKEN")?;
        Some(Self {
            space_id,
            access_token: SecretString::from(access_token),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as absent.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_owned())
}

/// Validate that a WhatsApp number is a bare digit string.
fn validate_whatsapp_number(number: &str, var_name: &str) -> Result<(), ConfigError> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_owned(),
            format!("expected digits only (got '{number}')"),
        ));
    }
    Ok(())
}
