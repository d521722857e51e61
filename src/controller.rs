/// Popup startup and routing of row interactions to host calls

use crate::config::PopupConfig;
use crate::error::{HostError, PopupError};
use crate::host::TabHost;
use crate::operations::collect_tabs;
use crate::table::TabTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Over,
    Out,
    Click,
}

/// Which part of a row the pointer event landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    CloseButton,
    CloseCell,
    Body,
}

/// A pointer event delegated from the container, resolved to its row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowEvent {
    pub kind: PointerKind,
    pub target: RowTarget,
    pub window_id: i32,
    pub tab_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    SwitchTo { window_id: i32, tab_id: i32 },
    Close { tab_id: i32 },
}

impl RowEvent {
    /// The host call this event asks for, if any.
    ///
    /// Clicks on the close button only close; clicks on the cell around it
    /// do nothing at all.
    pub fn host_command(&self) -> Option<HostCommand> {
        match (self.kind, self.target) {
            (PointerKind::Click, RowTarget::CloseButton) => Some(HostCommand::Close { tab_id: self.tab_id }),
            (PointerKind::Click, RowTarget::CloseCell) => None,
            (PointerKind::Click, RowTarget::Body) => Some(HostCommand::SwitchTo {
                window_id: self.window_id,
                tab_id: self.tab_id,
            }),
            (PointerKind::Over | PointerKind::Out, _) => None,
        }
    }
}

pub async fn execute<H: TabHost>(host: &H, command: HostCommand) -> Result<(), HostError> {
    match command {
        HostCommand::SwitchTo { window_id, tab_id } => switch_to(host, window_id, tab_id).await,
        HostCommand::Close { tab_id } => host.remove_tab(tab_id).await,
    }
}

/// Switch the browser to a tab.
///
/// Activating a tab does not raise its window on every platform, so a tab
/// in another window needs an explicit window focus first.
pub async fn switch_to<H: TabHost>(host: &H, window_id: i32, tab_id: i32) -> Result<(), HostError> {
    let current_window = host.current_window_id().await?;

    if window_id != current_window {
        host.focus_window(window_id).await?;
    }

    host.activate_tab(tab_id).await
}

/// A freshly opened popup: the rendered rows plus the outcome of
/// highlighting the active tab.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedPopup {
    pub table: TabTable,
    pub highlight: Result<(), PopupError>,
}

/// Build the table for a freshly opened popup.
///
/// The active-tab query is only issued once every row is rendered. A failed
/// highlight is reported in `highlight` and leaves the rows usable.
pub async fn open_popup<H: TabHost>(host: &H, config: PopupConfig) -> Result<OpenedPopup, HostError> {
    let windows = host.all_windows().await?;
    let tabs = collect_tabs(&windows, &config);

    let mut table = TabTable::new(config);
    table.render(tabs);

    let highlight = highlight_current_tab(host, &mut table).await;

    Ok(OpenedPopup { table, highlight })
}

pub async fn highlight_current_tab<H: TabHost>(host: &H, table: &mut TabTable) -> Result<(), PopupError> {
    let active = host.active_tab().await?;
    table.highlight_active(active.id)
}
