use serde::{Deserialize, Serialize};

/// Horizontal extent of the slider track, in the same coordinate space as
/// pointer `page_x`.
///
/// Captured once per drag at press time. A zero `width` is a caller
/// precondition violation: value mapping divides by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub width: f64,
}

impl BoundingBox {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_toml_table() {
        let b: BoundingBox = toml::from_str("left = 10.0\nwidth = 90.0").unwrap();
        assert_eq!(b, BoundingBox::new(10.0, 90.0));
    }
}
