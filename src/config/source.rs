//! Review source configuration

use serde::Deserialize;

use super::ValidationError;

/// Play Store review source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Review language (`hl` parameter)
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Storefront country (`gl` parameter)
    #[serde(default = "default_country")]
    pub country: String,

    /// Records requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Upper bound on pages fetched per collection
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            country: default_country(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

impl SourceConfig {
    /// Validates the source configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.lang.is_empty() || self.country.is_empty() {
            return Err(ValidationError::InvalidLocale);
        }
        if self.page_size == 0 || self.page_size > 200 {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.max_pages == 0 {
            return Err(ValidationError::InvalidMaxPages);
        }
        Ok(())
    }
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_country() -> String {
    "in".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_max_pages() -> u32 {
    50
}
