//! Scroll-direction visibility for the fixed header.

/// Remembers the previous scroll sample and whether the header is shown
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    pin_band: f64,
    last_y: f64,
    visible: bool,
}

impl ScrollTracker {
    pub fn new(pin_band: f64) -> Self {
        Self {
            pin_band,
            last_y: 0.0,
            visible: true,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feed a new vertical offset and return the resulting visibility.
    ///
    /// Inside the pin band the header is always shown. Above it, moving down
    /// hides and moving up shows; an unchanged offset keeps the current state.
    pub fn observe(&mut self, y: f64) -> bool {
        if y < self.pin_band {
            self.visible = true;
        } else if y > self.last_y {
            self.visible = false;
        } else if y < self.last_y {
            self.visible = true;
        }
        self.last_y = y;
        self.visible
    }
}
