//! Error types for widget construction.

use thiserror::Error;

/// Errors raised while assembling widgets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A scrollable was built without any axis scroll instance attached.
    /// An overlay scrollbar with no axis cannot do anything, so this fails
    /// fast at construction instead of degrading silently.
    #[error("scrollable requires at least one axis scroll instance")]
    NoAxisConfigured,
}
