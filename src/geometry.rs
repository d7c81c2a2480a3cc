use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by its width and height.
///
/// Inputs are taken as given; negative or non-finite dimensions are the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The rectangle's area, `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
