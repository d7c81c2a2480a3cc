use std::fmt;

use log::trace;

use crate::CssBuildError;
use crate::selector::{Fragment, FragmentKind};

/// The token placed between two combined selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    /// The combinator's glyph, or `None` for the descendant combinator,
    /// which is written as bare whitespace.
    pub fn glyph(self) -> Option<char> {
        match self {
            Combinator::Descendant => None,
            Combinator::Child => Some('>'),
            Combinator::AdjacentSibling => Some('+'),
            Combinator::GeneralSibling => Some('~'),
        }
    }
}

/// A CSS selector under construction, or fully built.
///
/// A selector is either *simple* (an ordered run of fragments with no
/// combinator) or *composite* (two selectors joined by a [`Combinator`]).
/// Every builder method consumes the selector and returns a new one, so each
/// chain owns its own state; independent chains cannot interfere.
///
/// Fragments must be added in category order (element, id, class, attribute,
/// pseudo-class, pseudo-element) and the element, id, and pseudo-element
/// fragments may each appear at most once. Violations fail immediately with
/// [`CssBuildError`]; the consumed selector is gone and the chain cannot be
/// resumed.
///
/// # Examples
///
/// ```rust
/// use cssbuild::{Combinator, Selector};
///
/// let selector = Selector::new()
///     .element("a")?
///     .attr("href$=\".png\"")?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
///
/// let combined = Selector::new()
///     .element("p")?
///     .combine(Combinator::Child, Selector::new().class("warning")?);
/// assert_eq!(combined.stringify(), "p > .warning");
/// # Ok::<(), cssbuild::CssBuildError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// An ordered run of fragments forming one simple selector.
    Simple(Vec<Fragment>),
    /// Two selectors joined by a combinator.
    Composite {
        left: Box<Selector>,
        combinator: Combinator,
        right: Box<Selector>,
    },
}

impl Selector {
    /// Creates an empty simple selector.
    pub fn new() -> Self {
        Selector::Simple(Vec::new())
    }

    /// Adds an element fragment (e.g., `div`). Must be the first fragment of
    /// a simple selector; at most one per simple selector.
    pub fn element(self, value: impl Into<String>) -> Result<Self, CssBuildError> {
        self.push(Fragment::new(FragmentKind::Element, value))
    }

    /// Adds an id fragment (rendered `#id`). At most one per simple selector.
    pub fn id(self, value: impl Into<String>) -> Result<Self, CssBuildError> {
        self.push(Fragment::new(FragmentKind::Id, value))
    }

    /// Adds a class fragment (rendered `.class`). Repeatable.
    pub fn class(self, value: impl Into<String>) -> Result<Self, CssBuildError> {
        self.push(Fragment::new(FragmentKind::Class, value))
    }

    /// Adds an attribute fragment (rendered `[attr]`). Repeatable.
    pub fn attr(self, value: impl Into<String>) -> Result<Self, CssBuildError> {
        self.push(Fragment::new(FragmentKind::Attribute, value))
    }

    /// Adds a pseudo-class fragment (rendered `:name`). Repeatable.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, CssBuildError> {
        self.push(Fragment::new(FragmentKind::PseudoClass, value))
    }

    /// Adds a pseudo-element fragment (rendered `::name`). At most one per
    /// simple selector.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, CssBuildError> {
        self.push(Fragment::new(FragmentKind::PseudoElement, value))
    }

    /// Joins this selector with `right` using `combinator`.
    ///
    /// Combination nests: the receiver becomes the left side of the new
    /// composite, so inner combinations resolve before outer ones.
    pub fn combine(self, combinator: Combinator, right: Selector) -> Self {
        trace!("combining {self:?} with {right:?} via {combinator:?}");
        Selector::Composite {
            left: Box::new(self),
            combinator,
            right: Box::new(right),
        }
    }

    /// Renders the selector to its final string form.
    ///
    /// Simple selectors concatenate their prefixed fragments with no
    /// separator; composites render `left <glyph> right` recursively, with
    /// the descendant combinator written as a single space.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    fn push(self, fragment: Fragment) -> Result<Self, CssBuildError> {
        let Selector::Simple(mut fragments) = self else {
            return Err(CssBuildError::AlreadyCombined);
        };

        // Duplicate is reported before order, so element().element() is a
        // duplicate rather than an ordering problem.
        if fragment.kind.is_unique() && fragments.iter().any(|f| f.kind == fragment.kind) {
            return Err(CssBuildError::DuplicateFragment(fragment.kind));
        }

        if let Some(last) = fragments.last()
            && fragment.kind.rank() < last.kind.rank()
        {
            return Err(CssBuildError::OrderViolation {
                found: fragment.kind,
                after: last.kind,
            });
        }

        trace!("appending fragment {fragment}");
        fragments.push(fragment);
        Ok(Selector::Simple(fragments))
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::new()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Simple(fragments) => {
                for fragment in fragments {
                    write!(f, "{fragment}")?;
                }
                Ok(())
            }
            Selector::Composite {
                left,
                combinator,
                right,
            } => match combinator.glyph() {
                Some(glyph) => write!(f, "{left} {glyph} {right}"),
                None => write!(f, "{left} {right}"),
            },
        }
    }
}
