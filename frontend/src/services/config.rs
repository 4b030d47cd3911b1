use log::{info, warn};
use shared::DashboardConfig;

/// Element holding the optional JSON configuration document
const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Read the page configuration, falling back to defaults when absent or bad
pub fn load() -> DashboardConfig {
    let Some(raw) = embedded_document() else {
        return DashboardConfig::default();
    };

    match DashboardConfig::from_json(&raw) {
        Ok(config) => {
            info!("⚙️ Loaded dashboard config (api base: {:?})", config.api_base_url);
            config
        }
        Err(err) => {
            warn!("Ignoring dashboard config: {}", err);
            DashboardConfig::default()
        }
    }
}

fn embedded_document() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}
