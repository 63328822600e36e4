//! Errors raised while defining, registering and mounting components

use thiserror::Error;

/// Errors that can occur during component operations
///
/// All of these are local and synchronous; none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentError {
    /// Tag is empty, lacks a hyphen, or uses characters outside the allowed set
    #[error("invalid tag '{tag}': {reason}")]
    InvalidTag { tag: String, reason: String },

    /// Render source cannot be turned into a render function
    #[error("invalid render for '{tag}': {reason}")]
    InvalidRender { tag: String, reason: String },

    /// A definition with this tag is already registered
    #[error("duplicate tag: {tag}")]
    DuplicateTag { tag: String },

    /// Rendering failed or produced a malformed template
    #[error("render of '{tag}' failed: {reason}")]
    Render { tag: String, reason: String },

    /// Handle was already unmounted (or never issued by this renderer)
    #[error("mount #{id} of '{tag}' is already unmounted")]
    AlreadyUnmounted { tag: String, id: u64 },
}

impl ComponentError {
    pub fn invalid_tag(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTag {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_render(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRender {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    pub fn render(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Render {
            tag: tag.into(),
            reason: reason.into(),
        }
    }
}
