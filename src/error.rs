//! Error types for selector building and JSON helpers.
//!
//! This module defines the errors that can occur when assembling a selector
//! out of order, repeating a fragment that only appears once per simple
//! selector, or decoding malformed JSON.

use thiserror::Error;

use crate::selector::FragmentKind;

/// Errors that can occur while building selectors or decoding JSON.
///
/// # Examples
///
/// ```rust
/// use cssbuild::{CssBuildError, Selector};
///
/// // Class fragments must come after the id fragment
/// let result = Selector::new().class("a").unwrap().id("b");
/// assert!(matches!(result, Err(CssBuildError::OrderViolation { .. })));
/// ```
#[derive(Error, Debug)]
pub enum CssBuildError {
    /// A fragment that may appear at most once per simple selector was added
    /// a second time (element, id, or pseudo-element).
    #[error("duplicate {0} fragment: only one {0} is allowed per simple selector")]
    DuplicateFragment(FragmentKind),

    /// A fragment was added after a fragment of a later category.
    ///
    /// Categories are fixed in the order element, id, class, attribute,
    /// pseudo-class, pseudo-element; a selector chain cannot go backwards.
    #[error("{found} fragment cannot follow {after}: fragments must be added in category order")]
    OrderViolation {
        found: FragmentKind,
        after: FragmentKind,
    },

    /// A fragment-adding operation was called on a selector that has already
    /// been combined. Fragments only attach to simple selectors; build the
    /// parts first, then `combine` them.
    #[error("cannot add fragments to a combined selector")]
    AlreadyCombined,

    /// The input to [`json::decode`](crate::json::decode) was not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
