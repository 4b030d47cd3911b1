//! Dashboard configuration
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration. The frontend embeds an optional JSON document in the page
//! and falls back to `DashboardConfig::default()` when it is missing.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Display and connection settings for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix joined onto every `/api/...` path; empty means same origin
    pub api_base_url: String,
    /// Shown instead of a market value that is unset
    pub missing_value_placeholder: String,
    /// Shown for transactions whose account no longer exists
    pub deleted_account_label: String,
    pub transfer_from_placeholder: String,
    pub transfer_to_placeholder: String,
    /// Leading option of the income and expense account lists
    pub account_placeholder: String,
    pub chart: ChartStyle,
}

/// Appearance of the monthly market value chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub title: String,
    pub series_label: String,
    /// Line color as RGB
    pub border_color: (u8, u8, u8),
    /// Area fill color as RGB
    pub background_color: (u8, u8, u8),
    /// Opacity of the area fill, 0.0 to 1.0
    pub fill_opacity: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            missing_value_placeholder: "N/A".to_string(),
            deleted_account_label: "Deleted account".to_string(),
            transfer_from_placeholder: "Select source account".to_string(),
            transfer_to_placeholder: "Select destination account".to_string(),
            account_placeholder: "Select account".to_string(),
            chart: ChartStyle::default(),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Total market value by month".to_string(),
            series_label: "Total market value".to_string(),
            border_color: (75, 192, 192),
            background_color: (75, 192, 192),
            fill_opacity: 0.2,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let base = self.api_base_url.trim();
        if !(base.is_empty()
            || base.starts_with('/')
            || base.starts_with("http://")
            || base.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url".to_string(),
                reason: format!("expected an http(s) URL or an absolute path, got '{}'", base),
            });
        }

        if !(0.0..=1.0).contains(&self.chart.fill_opacity) {
            return Err(ConfigError::InvalidValue {
                field: "chart.fill_opacity".to_string(),
                reason: format!("must be between 0 and 1, got {}", self.chart.fill_opacity),
            });
        }

        Ok(())
    }

    /// Full URL for an API path such as `/api/accounts`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim().trim_end_matches('/'), path)
    }
}
