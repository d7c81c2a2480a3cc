//! Selector building blocks and the builder itself.
//!
//! This module provides:
//!
//! - [`Selector`]: the builder value, either a simple run of fragments or a
//!   composite of two selectors joined by a combinator
//! - [`Combinator`]: descendant (space), child (`>`), adjacent sibling (`+`),
//!   and general sibling (`~`)
//! - [`Fragment`] / [`FragmentKind`]: one tagged piece of a simple selector
//!
//! ## Example
//!
//! ```rust
//! use cssbuild::Selector;
//!
//! let selector = Selector::new()
//!     .id("main")?
//!     .class("container")?
//!     .class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok::<(), cssbuild::CssBuildError>(())
//! ```

pub mod builder;
pub mod fragment;

pub use crate::selector::builder::{Combinator, Selector};
pub use crate::selector::fragment::{Fragment, FragmentKind};
