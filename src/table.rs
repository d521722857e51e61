/// The tab list as rendered in the popup's container
use std::collections::VecDeque;

use crate::config::PopupConfig;
use crate::controller::{PointerKind, RowEvent, RowTarget};
use crate::domain::extract_domain;
use crate::error::PopupError;
use crate::tab_data::Tab;

/// Rendered state of one tab: its data attributes plus the inline styles
/// and classes the pointer handlers toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub tab: Tab,
    pub domain: String,
    /// Set once, on the row of the tab that was active when the popup opened
    pub in_focus: bool,
    pub close_hidden: bool,
    pub title_colspan: u8,
    pub background: Option<String>,
    pub domain_color: Option<String>,
    pub span_width: Option<String>,
}

impl Row {
    pub fn new(tab: Tab) -> Row {
        Row {
            domain: extract_domain(&tab.url),
            tab,
            in_focus: false,
            close_hidden: true,
            title_colspan: 2,
            background: None,
            domain_color: None,
            span_width: None,
        }
    }

    pub fn tab_id(&self) -> i32 {
        self.tab.tab_id
    }

    pub fn window_id(&self) -> i32 {
        self.tab.window_id
    }
}

/// Handle on the popup's display container.
///
/// Created per popup open and dropped with it. Nothing here touches the
/// DOM; the Yew view renders whatever rows this holds.
#[derive(Debug, Clone, PartialEq)]
pub struct TabTable {
    config: PopupConfig,
    rows: VecDeque<Row>,
}

impl TabTable {
    pub fn new(config: PopupConfig) -> TabTable {
        TabTable {
            config,
            rows: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, tab_id: i32) -> Option<&Row> {
        self.rows.iter().find(|row| row.tab_id() == tab_id)
    }

    fn row_mut(&mut self, tab_id: i32) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.tab_id() == tab_id)
    }

    /// Insert one row per tab, each at the front of the container
    pub fn render(&mut self, tabs: Vec<Tab>) {
        for tab in tabs {
            self.rows.push_front(Row::new(tab));
        }
        log::debug!("Rendered {} tab rows", self.rows.len());
    }

    /// Mark the row of the initially active tab as in focus.
    ///
    /// A miss means the host's two answers disagree, so it is an error
    /// rather than a no-op.
    pub fn highlight_active(&mut self, tab_id: i32) -> Result<(), PopupError> {
        let background = self.config.focus_background.clone();
        let color = self.config.focused_domain_color.clone();

        let row = self.row_mut(tab_id).ok_or(PopupError::MissingRow(tab_id))?;
        row.background = Some(background);
        row.domain_color = Some(color);
        row.in_focus = true;

        log::debug!("Highlighted active tab {}", tab_id);
        Ok(())
    }

    pub fn hover_in(&mut self, tab_id: i32) {
        let color = self.config.focused_domain_color.clone();
        let width = self.config.expanded_span_width.clone();

        if let Some(row) = self.row_mut(tab_id) {
            row.close_hidden = false;
            row.title_colspan = 1;
            row.domain_color = Some(color);
            row.span_width = Some(width);
        }
    }

    /// Undo `hover_in`. The in-focus row keeps the focused domain color.
    pub fn hover_out(&mut self, tab_id: i32) {
        let muted = self.config.muted_domain_color.clone();
        let width = self.config.collapsed_span_width.clone();

        if let Some(row) = self.row_mut(tab_id) {
            row.close_hidden = true;
            row.title_colspan = 2;
            row.span_width = Some(width);

            if !row.in_focus {
                row.domain_color = Some(muted);
            }
        }
    }

    pub fn remove(&mut self, tab_id: i32) -> Option<Row> {
        let index = self.rows.iter().position(|row| row.tab_id() == tab_id)?;
        self.rows.remove(index)
    }

    /// Apply the container-side effect of a delegated pointer event
    pub fn apply(&mut self, event: &RowEvent) {
        match (event.kind, event.target) {
            (PointerKind::Over, _) => self.hover_in(event.tab_id),
            (PointerKind::Out, _) => self.hover_out(event.tab_id),
            (PointerKind::Click, RowTarget::CloseButton) => {
                self.remove(event.tab_id);
            }
            (PointerKind::Click, _) => {}
        }
    }
}
