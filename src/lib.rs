//! # cssbuild - CSS selector builder and small companions
//!
//! A small utility crate with three independent pieces:
//!
//! - **Selector building**: compose CSS selector strings from typed fragments
//!   (element, id, class, attribute, pseudo-class, pseudo-element) and join
//!   selectors with combinators, with ordering and uniqueness rules enforced
//!   as you build
//! - **JSON helpers**: generic [`json::encode`]/[`json::decode`] round-trip
//!   helpers over serde
//! - **Geometry**: a [`Rectangle`](geometry::Rectangle) value object with an
//!   area computation
//!
//! ## Quick Start
//!
//! ```rust
//! use cssbuild::{Combinator, Selector};
//!
//! let item = Selector::new().element("li")?.pseudo_class("first-child")?;
//! let link = Selector::new().element("a")?.class("external")?;
//! let combined = item.combine(Combinator::Descendant, link);
//!
//! assert_eq!(combined.stringify(), "li:first-child a.external");
//! # Ok::<(), cssbuild::CssBuildError>(())
//! ```
//!
//! ## Selector rules
//!
//! Within one simple selector, fragments are fixed in the order element, id,
//! class, attribute, pseudo-class, pseudo-element; element, id, and
//! pseudo-element may each appear at most once. Adding a fragment out of
//! order or repeating a one-shot fragment fails immediately with
//! [`CssBuildError`]. Multi-part selectors are built by combining simple
//! selectors, never by adding a second element fragment.
//!
//! Every builder method consumes its selector and returns a new value, so
//! separate chains never share state.
//!
//! ## Modules
//!
//! - [`selector`]: fragments, the builder, and combinators
//! - [`json`]: JSON encode/decode helpers
//! - [`geometry`]: the rectangle value object
//! - [`error`]: the crate error type

pub mod error;
pub mod geometry;
pub mod json;
pub mod selector;

pub use error::CssBuildError;
pub use selector::{Combinator, Fragment, FragmentKind, Selector};
