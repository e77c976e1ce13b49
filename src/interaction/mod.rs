//! Pointer-driven interaction layered over rendered chart elements.
//!
//! Every `create_*`/`add_*` entry point takes its host handle as an `Option`
//! and silently does nothing when the handle is missing, so optional chart
//! chrome never fails a render.

mod element;
mod events;
mod hover;
mod listeners;
mod time_controls;
mod tooltip;
mod zoom_pan;

use serde::{Deserialize, Serialize};

pub use element::Element;
pub use events::{PointerEvent, WheelEvent};
pub use hover::{
    HOVER_BRIGHTEN_FACTOR, HOVER_STROKE_WIDTH_DELTA, HoverBinding, HoverCallback,
    HoverStyleSnapshot, add_hover_effects,
};
pub use listeners::{DRAG_GESTURE_LISTENERS, ListenerGuard, ListenerKind, ListenerRegistry};
pub use time_controls::{
    ACTIVE_CLASS, CONTROL_CLASS, ControlButton, ControlStrip, PeriodChangeCallback, TimeControls,
    create_time_controls, period_duration,
};
pub use tooltip::{
    Tooltip, TooltipConfig, TooltipContainer, TooltipNode, TooltipSize, create_tooltip,
};
pub use zoom_pan::{
    GestureEnd, Surface, TRANSFORM_ATTRIBUTE, ZoomPan, ZoomPanConfig, ZoomPanState, add_zoom_pan,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// A drag gesture is in progress and holds document listeners.
    Dragging,
}
