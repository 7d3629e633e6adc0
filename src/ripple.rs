//! Press feedback: short-lived coloured circles drawn where a button was hit.

use crate::config::RIPPLE_COLORS;
use rand::seq::IndexedRandom;
use std::rc::Rc;
use yew::Reducible;

/// Client-space rectangle of the pressed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub color: &'static str,
}

impl Ripple {
    /// A circle a quarter of the element's shorter side in radius, centred
    /// on the click point relative to the element.
    pub fn at(id: u32, x: f64, y: f64, bounds: Bounds, color: &'static str) -> Self {
        let radius = bounds.width.min(bounds.height) / 4.0;
        Ripple {
            id,
            left: x - bounds.left - radius,
            top: y - bounds.top - radius,
            size: radius * 2.0,
            color,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; top: {top}px; left: {left}px; background-color: {color}; pointer-events: none;",
            size = self.size,
            top = self.top,
            left = self.left,
            color = self.color,
        )
    }
}

pub fn random_color() -> &'static str {
    RIPPLE_COLORS.choose(&mut rand::rng()).copied().unwrap_or("#2196f3")
}

pub enum RippleAction {
    Spawn {
        x: f64,
        y: f64,
        bounds: Bounds,
        color: &'static str,
    },
    /// Ripples live for a fixed time, so they expire in creation order.
    ExpireOldest,
}

#[derive(Debug, Default, PartialEq)]
pub struct Ripples {
    pub items: Vec<Ripple>,
    next_id: u32,
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        let mut next_id = self.next_id;
        match action {
            RippleAction::Spawn { x, y, bounds, color } => {
                items.push(Ripple::at(next_id, x, y, bounds, color));
                next_id = next_id.wrapping_add(1);
            }
            RippleAction::ExpireOldest => {
                if !items.is_empty() {
                    items.remove(0);
                }
            }
        }
        Rc::new(Ripples { items, next_id })
    }
}
