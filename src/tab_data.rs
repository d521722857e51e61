/// Data structures for the tab switcher
use serde::{Deserialize, Serialize};

use crate::config::PopupConfig;

/// A browser window as enumerated by the host, with its tabs populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostWindow {
    pub id: i32,
    #[serde(default)]
    pub tabs: Vec<HostTab>,
}

/// A browser tab as reported by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostTab {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
}

/// One row's worth of data in the tab list
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub window_id: i32,
    pub tab_id: i32,
    pub title: String,
    pub url: String,
    pub icon: String,
}

impl Tab {
    pub fn from_host(window_id: i32, tab: &HostTab, config: &PopupConfig) -> Tab {
        Tab {
            window_id,
            tab_id: tab.id,
            title: tab.title.clone(),
            url: tab.url.clone(),
            icon: select_icon(&tab.title, &tab.url, tab.fav_icon_url.as_deref(), config),
        }
    }
}

/// Pick the icon shown for a tab.
///
/// The "Extensions" title wins over the `chrome://` rule; everything else
/// shows its favicon as-is, empty when the host had none.
pub fn select_icon(title: &str, url: &str, favicon: Option<&str>, config: &PopupConfig) -> String {
    if title == "Extensions" {
        config.extension_icon.clone()
    } else if url.starts_with("chrome://") {
        config.new_tab_icon.clone()
    } else {
        favicon.unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_tab(id: i32, title: &str, url: &str, favicon: Option<&str>) -> HostTab {
        HostTab {
            id,
            title: title.to_string(),
            url: url.to_string(),
            fav_icon_url: favicon.map(str::to_string),
        }
    }

    #[test]
    fn test_tab_from_host() {
        let config = PopupConfig::default();
        let tab = Tab::from_host(
            3,
            &host_tab(17, "Rust", "https://rust-lang.org", Some("https://rust-lang.org/favicon.ico")),
            &config,
        );

        assert_eq!(tab.window_id, 3);
        assert_eq!(tab.tab_id, 17);
        assert_eq!(tab.title, "Rust");
        assert_eq!(tab.url, "https://rust-lang.org");
        assert_eq!(tab.icon, "https://rust-lang.org/favicon.ico");
    }

    #[test]
    fn test_extensions_title_wins_over_chrome_url() {
        let config = PopupConfig::default();

        assert_eq!(
            select_icon("Extensions", "chrome://extensions/", None, &config),
            "icons/extension.png"
        );
        assert_eq!(
            select_icon("Extensions", "https://example.com", Some("fav.png"), &config),
            "icons/extension.png"
        );
    }

    #[test]
    fn test_chrome_url_gets_new_tab_icon() {
        let config = PopupConfig::default();

        assert_eq!(select_icon("New Tab", "chrome://newtab/", Some("fav.png"), &config), "icons/new-tab.png");
        assert_eq!(select_icon("extensions", "chrome://extensions/", None, &config), "icons/new-tab.png");
    }

    #[test]
    fn test_favicon_passed_through() {
        let config = PopupConfig::default();

        assert_eq!(select_icon("Docs", "https://docs.rs", Some("https://docs.rs/favicon.ico"), &config), "https://docs.rs/favicon.ico");
        assert_eq!(select_icon("Blank", "about:blank", None, &config), "");
        assert_eq!(select_icon("Empty", "https://example.com", Some(""), &config), "");
    }

    #[test]
    fn test_deserialize_host_windows() {
        let json = r#"[
            {"id": 1, "focused": true, "tabs": [
                {"id": 10, "index": 0, "title": "GitHub", "url": "https://github.com", "favIconUrl": "https://github.com/favicon.ico"},
                {"id": 11, "index": 1, "title": "New Tab", "url": "chrome://newtab/"}
            ]},
            {"id": 2}
        ]"#;

        let windows: Vec<HostWindow> = serde_json::from_str(json).unwrap();

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].tabs[0].fav_icon_url.as_deref(), Some("https://github.com/favicon.ico"));
        assert_eq!(windows[0].tabs[1].fav_icon_url, None);
        assert!(windows[1].tabs.is_empty());
    }
}
