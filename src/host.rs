/// The browser's window/tab API as seen by the popup
use crate::error::HostError;
use crate::tab_data::{HostTab, HostWindow};

/// Asynchronous window and tab operations provided by the browser.
///
/// All futures run on the popup's single UI thread, so implementations are
/// not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait TabHost {
    /// All windows, in host order, with their tabs populated
    async fn all_windows(&self) -> Result<Vec<HostWindow>, HostError>;

    /// The active tab of the current window
    async fn active_tab(&self) -> Result<HostTab, HostError>;

    async fn current_window_id(&self) -> Result<i32, HostError>;

    /// Bring a window to the foreground
    async fn focus_window(&self, window_id: i32) -> Result<(), HostError>;

    /// Make a tab active and highlighted within its window
    async fn activate_tab(&self, tab_id: i32) -> Result<(), HostError>;

    async fn remove_tab(&self, tab_id: i32) -> Result<(), HostError>;
}
