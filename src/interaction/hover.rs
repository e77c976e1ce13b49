use std::fmt;

use crate::interaction::{Element, PointerEvent};
use crate::render::brighten_color;

pub const HOVER_BRIGHTEN_FACTOR: f64 = 0.2;
pub const HOVER_STROKE_WIDTH_DELTA: f64 = 1.0;

pub type HoverCallback = Box<dyn FnMut(&PointerEvent, &Element)>;

/// Pre-hover presentation attributes, captured once at binding time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverStyleSnapshot {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<String>,
}

impl HoverStyleSnapshot {
    #[must_use]
    pub fn capture(element: &Element) -> Self {
        Self {
            fill: element.attribute("fill").map(str::to_owned),
            stroke: element.attribute("stroke").map(str::to_owned),
            stroke_width: element.attribute("stroke-width").map(str::to_owned),
        }
    }

    /// Writes the snapshot back verbatim, removing attributes that were absent.
    pub fn restore(&self, element: &mut Element) {
        element.restore_attribute("fill", self.fill.as_deref());
        element.restore_attribute("stroke", self.stroke.as_deref());
        element.restore_attribute("stroke-width", self.stroke_width.as_deref());
    }

    fn hovered_fill(&self) -> Option<String> {
        let fill = self.fill.as_deref()?;
        // gradients and patterns are left alone
        if fill.contains("url(") {
            return None;
        }
        Some(brighten_color(fill, HOVER_BRIGHTEN_FACTOR))
    }

    fn hovered_stroke_width(&self) -> Option<f64> {
        self.stroke.as_ref()?;
        let base = self
            .stroke_width
            .as_deref()
            .and_then(leading_number)
            .unwrap_or(1.0);
        Some(base + HOVER_STROKE_WIDTH_DELTA)
    }
}

/// Enter/leave handling for one element.
pub struct HoverBinding {
    snapshot: HoverStyleSnapshot,
    on_enter: Option<HoverCallback>,
    on_leave: Option<HoverCallback>,
    hovered: bool,
}

impl fmt::Debug for HoverBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverBinding")
            .field("snapshot", &self.snapshot)
            .field("has_on_enter", &self.on_enter.is_some())
            .field("has_on_leave", &self.on_leave.is_some())
            .field("hovered", &self.hovered)
            .finish()
    }
}

/// Captures `element`'s style and returns the binding that drives its hover
/// state. A missing element yields `None`.
pub fn add_hover_effects(
    element: Option<&Element>,
    on_enter: Option<HoverCallback>,
    on_leave: Option<HoverCallback>,
) -> Option<HoverBinding> {
    let element = element?;
    Some(HoverBinding {
        snapshot: HoverStyleSnapshot::capture(element),
        on_enter,
        on_leave,
        hovered: false,
    })
}

impl HoverBinding {
    #[must_use]
    pub fn snapshot(&self) -> &HoverStyleSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Applies the hover style, then notifies `on_enter`.
    ///
    /// The style is always derived from the snapshot, so repeated enters
    /// never compound.
    pub fn pointer_enter(&mut self, element: &mut Element, event: &PointerEvent) {
        if let Some(fill) = self.snapshot.hovered_fill() {
            element.set_attribute("fill", fill);
        }
        if let Some(width) = self.snapshot.hovered_stroke_width() {
            element.set_attribute("stroke-width", width.to_string());
        }
        self.hovered = true;
        if let Some(callback) = self.on_enter.as_mut() {
            callback(event, &*element);
        }
    }

    /// Restores the snapshot, then notifies `on_leave`.
    pub fn pointer_leave(&mut self, element: &mut Element, event: &PointerEvent) {
        self.snapshot.restore(element);
        self.hovered = false;
        if let Some(callback) = self.on_leave.as_mut() {
            callback(event, &*element);
        }
    }
}

/// Numeric prefix of an attribute value (`"2px"` → `2.0`).
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|&(_, ch)| !(ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')))
        .map_or(text.len(), |(index, _)| index);
    (1..=end)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::leading_number;

    #[test]
    fn leading_number_reads_numeric_prefix() {
        assert_eq!(leading_number("2"), Some(2.0));
        assert_eq!(leading_number(" 1.5px"), Some(1.5));
        assert_eq!(leading_number("auto"), None);
    }
}
