use serde::{Deserialize, Serialize};

/// One active touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub page_x: f64,
}

/// A pointer-like event: either a mouse/pen position or a multi-touch list.
///
/// When `touches` is non-empty the first contact wins and `page_x` is ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub page_x: f64,
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
}

impl PointerEvent {
    /// Mouse/pen event at `page_x`.
    pub fn mouse(page_x: f64) -> Self {
        Self {
            page_x,
            touches: Vec::new(),
        }
    }

    /// Touch event with the given contacts, in order.
    pub fn touch(points: impl IntoIterator<Item = f64>) -> Self {
        Self {
            page_x: 0.0,
            touches: points.into_iter().map(|page_x| TouchPoint { page_x }).collect(),
        }
    }
}
