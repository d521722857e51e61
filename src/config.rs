/// Popup styling and asset configuration
use serde::{Deserialize, Serialize};

/// Colors, widths and icon paths used when rendering and restyling rows.
///
/// Every field has a default, so a partial override object is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopupConfig {
    /// Row background of the tab that was active when the popup opened
    pub focus_background: String,
    /// Domain text color while hovered or in focus
    pub focused_domain_color: String,
    /// Domain text color after the pointer leaves a row that is not in focus
    pub muted_domain_color: String,
    /// Width of the title and domain spans while the close button is shown
    pub expanded_span_width: String,
    /// Width of the title and domain spans once the close button is hidden again
    pub collapsed_span_width: String,
    pub extension_icon: String,
    pub new_tab_icon: String,
    pub close_icon: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            focus_background: "#8AB4F8".to_string(),
            focused_domain_color: "#000000".to_string(),
            muted_domain_color: "#9b9b97".to_string(),
            expanded_span_width: "228px".to_string(),
            collapsed_span_width: "264px".to_string(),
            extension_icon: "icons/extension.png".to_string(),
            new_tab_icon: "icons/new-tab.png".to_string(),
            close_icon: "icons/close.png".to_string(),
        }
    }
}
