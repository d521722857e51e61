/// Tab list assembly from the host's window enumeration

use std::collections::VecDeque;

use crate::config::PopupConfig;
use crate::tab_data::{HostWindow, Tab};

/// Flatten windows into tabs, prepending each one.
///
/// The last tab of the last window ends up first. `TabTable::render`
/// inserts rows at the front in this order, which restores the host's
/// enumeration order on screen.
pub fn collect_tabs(windows: &[HostWindow], config: &PopupConfig) -> Vec<Tab> {
    let mut tabs = VecDeque::new();

    for window in windows {
        for tab in &window.tabs {
            tabs.push_front(Tab::from_host(window.id, tab, config));
        }
    }

    tabs.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_data::HostTab;

    fn create_test_window(id: i32, tab_ids: &[i32]) -> HostWindow {
        HostWindow {
            id,
            tabs: tab_ids
                .iter()
                .map(|&tab_id| HostTab {
                    id: tab_id,
                    title: format!("Tab {}", tab_id),
                    url: format!("https://example.com/{}", tab_id),
                    fav_icon_url: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_collect_tabs_reverses_enumeration() {
        let windows = vec![create_test_window(1, &[10, 11]), create_test_window(2, &[20, 21, 22])];

        let tabs = collect_tabs(&windows, &PopupConfig::default());
        let ids: Vec<(i32, i32)> = tabs.iter().map(|t| (t.window_id, t.tab_id)).collect();

        assert_eq!(ids, vec![(2, 22), (2, 21), (2, 20), (1, 11), (1, 10)]);
    }

    #[test]
    fn test_collect_tabs_empty() {
        assert!(collect_tabs(&[], &PopupConfig::default()).is_empty());
        assert!(collect_tabs(&[create_test_window(1, &[])], &PopupConfig::default()).is_empty());
    }
}
