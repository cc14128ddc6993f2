//! Application Configuration - Shared by the Web and Mobile Apps
//!
//! Field names are camelCase so existing app config JSON loads as-is.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::constants::{APP_DOMAIN, APP_NAME, COMPANY_NAME, DEFAULT_API_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required config field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SvgrAppConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_app_domain")]
    pub app_domain: String,
    #[serde(default = "default_company_name")]
    pub company_name: String,
    pub firebase: FirebaseConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_cat: Option<RevenueCatConfig>,
}

fn default_api_url() -> String { DEFAULT_API_URL.to_string() }
fn default_app_name() -> String { APP_NAME.to_string() }
fn default_app_domain() -> String { APP_DOMAIN.to_string() }
fn default_company_name() -> String { COMPANY_NAME.to_string() }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

/// Only one of the store keys is set for a given app build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueCatConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_apple: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_google: Option<String>,
    pub offer_id: String,
    pub entitlement_id: String,
}

impl SvgrAppConfig {
    /// Branding and API URL from the library constants.
    pub fn with_firebase(firebase: FirebaseConfig) -> Self {
        Self {
            api_url: default_api_url(),
            app_name: default_app_name(),
            app_domain: default_app_domain(),
            company_name: default_company_name(),
            firebase,
            revenue_cat: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check_required()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn check_required(&self) -> Result<(), ConfigError> {
        let mut required = vec![
            ("apiUrl", &self.api_url),
            ("firebase.apiKey", &self.firebase.api_key),
            ("firebase.projectId", &self.firebase.project_id),
        ];
        if let Some(rc) = &self.revenue_cat {
            required.push(("revenueCat.offerId", &rc.offer_id));
            required.push(("revenueCat.entitlementId", &rc.entitlement_id));
        }

        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::MissingField(field)),
            None => Ok(()),
        }
    }
}
