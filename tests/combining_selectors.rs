//! Integration tests for combining selectors.
//!
//! Covers the four combinators (descendant, child, adjacent sibling, general
//! sibling), nested combination, and the rule that fragments cannot be added
//! to an already-combined selector.

use cssbuild::{Combinator, CssBuildError, Selector};

fn element(name: &str) -> Selector {
    Selector::new().element(name).unwrap()
}

// ============================================================================
// SINGLE COMBINATORS
// ============================================================================

#[test]
fn test_adjacent_sibling_combinator() {
    let combined = element("p").combine(Combinator::AdjacentSibling, element("img"));
    assert_eq!(combined.stringify(), "p + img");
}

#[test]
fn test_general_sibling_combinator() {
    let combined = element("h2").combine(Combinator::GeneralSibling, element("p"));
    assert_eq!(combined.stringify(), "h2 ~ p");
}

#[test]
fn test_child_combinator() {
    let combined = element("ul").combine(Combinator::Child, element("li"));
    assert_eq!(combined.stringify(), "ul > li");
}

#[test]
fn test_descendant_combinator_is_single_space() {
    let combined = element("nav").combine(Combinator::Descendant, element("a"));
    assert_eq!(combined.stringify(), "nav a");
}

#[test]
fn test_combining_compound_selectors() {
    let left = Selector::new()
        .element("div")
        .unwrap()
        .id("main")
        .unwrap()
        .class("sidebar")
        .unwrap();
    let right = Selector::new().class("active").unwrap();

    let combined = left.combine(Combinator::Child, right);
    assert_eq!(combined.stringify(), "div#main.sidebar > .active");
}

// ============================================================================
// NESTED COMBINATION
// ============================================================================

#[test]
fn test_nested_combination_resolves_innermost_first() {
    // X + (Y ~ Z) renders as "X + Y ~ Z"
    let inner = element("y").combine(Combinator::GeneralSibling, element("z"));
    let combined = element("x").combine(Combinator::AdjacentSibling, inner);
    assert_eq!(combined.stringify(), "x + y ~ z");
}

#[test]
fn test_left_nested_combination() {
    // (X > Y) followed by Z as a descendant
    let inner = element("x").combine(Combinator::Child, element("y"));
    let combined = inner.combine(Combinator::Descendant, element("z"));
    assert_eq!(combined.stringify(), "x > y z");
}

#[test]
fn test_deeply_nested_combination() {
    let inner = element("li")
        .combine(Combinator::Child, element("a"))
        .combine(Combinator::AdjacentSibling, element("span"));
    let combined = element("ul").combine(Combinator::Descendant, inner);
    assert_eq!(combined.stringify(), "ul li > a + span");
}

#[test]
fn test_combined_selector_can_be_combined_on_either_side() {
    let left = element("a").combine(Combinator::Child, element("b"));
    let right = element("c").combine(Combinator::GeneralSibling, element("d"));
    let combined = left.combine(Combinator::AdjacentSibling, right);
    assert_eq!(combined.stringify(), "a > b + c ~ d");
}

// ============================================================================
// FRAGMENTS AFTER COMBINATION
// ============================================================================

#[test]
fn test_class_on_combined_selector_fails() {
    let combined = element("div").combine(Combinator::Child, element("span"));
    let result = combined.class("late");
    assert!(matches!(result, Err(CssBuildError::AlreadyCombined)));
}

#[test]
fn test_element_on_combined_selector_fails() {
    let combined = element("div").combine(Combinator::Descendant, element("p"));
    let result = combined.element("section");
    assert!(matches!(result, Err(CssBuildError::AlreadyCombined)));
}

#[test]
fn test_pseudo_element_on_combined_selector_fails() {
    let combined = element("div").combine(Combinator::GeneralSibling, element("p"));
    let result = combined.pseudo_element("before");
    assert!(matches!(result, Err(CssBuildError::AlreadyCombined)));
}
