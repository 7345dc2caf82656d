//! Store Settings Model

use serde::{Deserialize, Serialize};

/// Store settings (singleton resource)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub address: String,
    /// Banner text shown across the storefront
    #[serde(default)]
    pub delivery_banner: String,
    /// Order total above which delivery is free
    #[serde(default)]
    pub free_delivery_threshold: Option<f64>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
}

/// Update store settings payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_delivery_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
}
