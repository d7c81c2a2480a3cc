use std::fmt;

/// The category of a selector fragment.
///
/// Categories have a fixed order within a simple selector: element, id,
/// class, attribute, pseudo-class, pseudo-element. Element, id, and
/// pseudo-element may each appear at most once; the rest repeat freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl FragmentKind {
    /// Position of this category in the fixed ordering.
    pub fn rank(self) -> u8 {
        match self {
            FragmentKind::Element => 0,
            FragmentKind::Id => 1,
            FragmentKind::Class => 2,
            FragmentKind::Attribute => 3,
            FragmentKind::PseudoClass => 4,
            FragmentKind::PseudoElement => 5,
        }
    }

    /// Whether a simple selector admits at most one fragment of this kind.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

/// One piece of a simple selector: a category tag plus its text payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub value: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Fragment {
    /// Renders the fragment with its category prefix (`#id`, `.class`,
    /// `[attr]`, `:pseudo-class`, `::pseudo-element`; elements are bare).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FragmentKind::Element => write!(f, "{}", self.value),
            FragmentKind::Id => write!(f, "#{}", self.value),
            FragmentKind::Class => write!(f, ".{}", self.value),
            FragmentKind::Attribute => write!(f, "[{}]", self.value),
            FragmentKind::PseudoClass => write!(f, ":{}", self.value),
            FragmentKind::PseudoElement => write!(f, "::{}", self.value),
        }
    }
}
