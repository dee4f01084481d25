#![forbid(unsafe_code)]

//! Host-neutral input events.
//!
//! Hosts translate whatever their platform delivers (DOM pointer events,
//! terminal mouse reports, touch input) into these types before handing
//! them to a panel row.
//!
//! # Coordinates
//! - Pointer coordinates are 0-indexed cells, origin at top-left.
//! - Scroll offsets and viewport heights share one unit, whatever the host
//!   uses; only their ratios matter.

use std::time::Duration;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer input.
    Pointer(PointerEvent),

    /// Page scroll position changed.
    Scroll(ScrollEvent),

    /// The host drew a frame; `dt` has elapsed since the previous one.
    Frame(Duration),

    /// The drawable area changed size.
    Resize {
        /// New width in cells.
        width: u16,
        /// New height in cells.
        height: u16,
    },
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Device that produced the event.
    pub device: PointerDevice,

    /// X coordinate (0-indexed).
    pub x: u16,

    /// Y coordinate (0-indexed).
    pub y: u16,
}

impl PointerEvent {
    /// Create a mouse pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            device: PointerDevice::Mouse,
            x,
            y,
        }
    }

    /// Set the originating device.
    #[must_use]
    pub const fn with_device(mut self, device: PointerDevice) -> Self {
        self.device = device;
        self
    }

    /// Mouse moved to `(x, y)`.
    #[must_use]
    pub const fn moved(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }

    /// Touch tap at `(x, y)`.
    #[must_use]
    pub const fn tap(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Tap, x, y).with_device(PointerDevice::Touch)
    }

    /// Pointer left the host surface entirely.
    #[must_use]
    pub const fn left() -> Self {
        Self::new(PointerEventKind::Left, 0, 0)
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved (hover).
    Moved,

    /// Primary button or contact pressed.
    Down,

    /// Primary button or contact released.
    Up,

    /// Short press-and-release with no movement (touch tap or click).
    Tap,

    /// Pointer left the host surface; coordinates are meaningless.
    Left,
}

/// Pointer device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerDevice {
    /// Mouse or trackpad; reports hover.
    #[default]
    Mouse,

    /// Finger; no hover, only taps.
    Touch,

    /// Stylus; hover where the digitizer supports it.
    Pen,
}

impl PointerDevice {
    /// Whether this device reports hover movement.
    #[must_use]
    pub const fn hovers(self) -> bool {
        !matches!(self, Self::Touch)
    }
}

/// Page scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// Distance scrolled from the top of the page.
    pub offset: f32,

    /// Height of the visible viewport.
    pub viewport: f32,
}

impl ScrollEvent {
    /// Create a scroll event.
    #[must_use]
    pub const fn new(offset: f32, viewport: f32) -> Self {
        Self { offset, viewport }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_is_touch() {
        let tap = PointerEvent::tap(3, 4);
        assert_eq!(tap.kind, PointerEventKind::Tap);
        assert_eq!(tap.device, PointerDevice::Touch);
        assert_eq!(tap.position(), (3, 4));
    }

    #[test]
    fn only_touch_lacks_hover() {
        assert!(PointerDevice::Mouse.hovers());
        assert!(PointerDevice::Pen.hovers());
        assert!(!PointerDevice::Touch.hovers());
    }

    #[test]
    fn events_compare() {
        let a = Event::Pointer(PointerEvent::moved(1, 2));
        let b = Event::Pointer(PointerEvent::moved(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, Event::Frame(Duration::from_millis(16)));
    }
}
