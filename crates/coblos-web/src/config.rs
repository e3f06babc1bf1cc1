use coblos_core::Settings;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block that
/// overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "coblos-config";

pub const DEFAULT_VOTE_SELECTOR: &str = "button[data-candidate]";
pub const DEFAULT_CANDIDATE_ATTRIBUTE: &str = "data-candidate";
pub const DEFAULT_REGISTER_FORM_ID: &str = "register-form";

/// Where the page keeps its controls, plus the shared [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    #[serde(flatten)]
    pub settings: Settings,
    /// CSS selector matching every vote control
    pub vote_selector: String,
    /// Attribute on a vote control holding the candidate id
    pub candidate_attribute: String,
    pub register_form_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            vote_selector: DEFAULT_VOTE_SELECTOR.to_string(),
            candidate_attribute: DEFAULT_CANDIDATE_ATTRIBUTE.to_string(),
            register_form_id: DEFAULT_REGISTER_FORM_ID.to_string(),
        }
    }
}

impl PageConfig {
    /// Build from the config block's text, if the page has one. A block that
    /// does not parse is logged and ignored.
    pub fn from_page(block: Option<&str>) -> Self {
        let Some(text) = block.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str(text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed #{} block", CONFIG_ELEMENT_ID);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_block_is_default() {
        assert_eq!(PageConfig::from_page(None), PageConfig::default());
        assert_eq!(PageConfig::from_page(Some("  \n ")), PageConfig::default());
    }

    #[test]
    fn test_defaults_match_page_markup() {
        let config = PageConfig::default();
        assert_eq!(config.vote_selector, "button[data-candidate]");
        assert_eq!(config.candidate_attribute, "data-candidate");
        assert_eq!(config.register_form_id, "register-form");
        assert_eq!(config.settings.toast_duration_ms, 2500);
    }

    #[test]
    fn test_block_overrides_selectors_and_settings() {
        let config = PageConfig::from_page(Some(
            r#"{
                "vote_selector": "[data-vote]",
                "candidate_attribute": "data-vote",
                "messages": { "vote_failed": "Something went wrong." },
                "endpoints": { "vote": "/v2/vote" }
            }"#,
        ));
        assert_eq!(config.vote_selector, "[data-vote]");
        assert_eq!(config.candidate_attribute, "data-vote");
        assert_eq!(config.register_form_id, "register-form");
        assert_eq!(config.settings.messages.vote_failed, "Something went wrong.");
        assert_eq!(config.settings.messages.cancel_label, "Batal");
        assert_eq!(config.settings.endpoints.vote, "/v2/vote");
        assert_eq!(config.settings.endpoints.register, "/register");
    }

    #[test]
    fn test_malformed_block_falls_back() {
        assert_eq!(
            PageConfig::from_page(Some("{ vote_selector: ")),
            PageConfig::default()
        );
    }
}
