/// Error types for host calls and popup setup
use thiserror::Error;

/// A failed call into the browser's window/tab API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("{call} failed: {message}")]
    Call { call: &'static str, message: String },
    #[error("failed to decode {call} response: {message}")]
    Decode { call: &'static str, message: String },
    #[error("no active tab in the current window")]
    NoActiveTab,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopupError {
    #[error(transparent)]
    Host(#[from] HostError),
    /// The active tab reported by the host has no rendered row. The window
    /// enumeration and the active-tab query disagree.
    #[error("active tab {0} has no row in the tab list")]
    MissingRow(i32),
}
