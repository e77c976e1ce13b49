use serde::{Deserialize, Serialize};

/// Pointer position in client (page viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Wheel input; only the sign of `delta_y` matters (negative zooms in).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub delta_y: f64,
}

impl WheelEvent {
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64, delta_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            delta_y,
        }
    }

    /// `+1` for zoom in, `-1` for zoom out, `0` for no movement.
    #[must_use]
    pub fn zoom_direction(self) -> f64 {
        if self.delta_y < 0.0 {
            1.0
        } else if self.delta_y > 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}
