//! Error types for the landing page UI
//!
//! Nothing on the page can fail in a way the visitor sees. These errors exist
//! for the DOM boundary (no window, no document) and configuration checks;
//! event handlers log them to the console and carry on.

use thiserror::Error;

/// Errors that can occur at the browser boundary of the UI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// No `window` object (not running in a browser)
    #[error("No window object available")]
    WindowUnavailable,
    /// No `document` on the window
    #[error("No document available")]
    DocumentUnavailable,
    /// A browser API call returned an exception
    #[error("Browser call failed: {0}")]
    Browser(String),
    /// Site configuration rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
