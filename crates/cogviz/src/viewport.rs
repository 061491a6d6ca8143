//! Rendering surface size tracking.

use log::{debug, warn};

use cogviz_core::geometry::Size;

/// Size assumed before the host reports one.
pub const DEFAULT_SIZE: Size = Size::new(600.0, 400.0);

/// Result of reporting a surface size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportChange {
    /// Same size as before; nothing to rebuild.
    Unchanged,
    /// A new drawable size; the layout must be rebuilt.
    Resized,
    /// The size was recorded but cannot host a layout yet.
    Degenerate,
}

impl ViewportChange {
    pub fn needs_rebuild(self) -> bool {
        self == Self::Resized
    }
}

/// Remembers the size of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTracker {
    size: Size,
    mounted: bool,
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl ViewportTracker {
    /// Creates a tracker that reports `initial` until mounted.
    pub fn new(initial: Size) -> Self {
        Self {
            size: initial,
            mounted: false,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// True once mounted with a size that can hold a layout.
    pub fn is_ready(&self) -> bool {
        self.mounted && self.size.is_drawable()
    }

    /// Captures the surface size at mount time.
    pub fn mount(&mut self, size: Size) -> ViewportChange {
        self.mounted = true;
        self.size = size;
        debug!(width = size.width(), height = size.height(); "Viewport mounted");

        if size.is_drawable() {
            ViewportChange::Resized
        } else {
            warn!(width = size.width(), height = size.height(); "Mounted with degenerate size");
            ViewportChange::Degenerate
        }
    }

    /// Records a size reported by the host after mount.
    pub fn observe(&mut self, size: Size) -> ViewportChange {
        if size == self.size {
            return ViewportChange::Unchanged;
        }

        self.size = size;
        if !size.is_drawable() {
            debug!(width = size.width(), height = size.height(); "Ignoring degenerate size");
            return ViewportChange::Degenerate;
        }

        debug!(width = size.width(), height = size.height(); "Viewport resized");
        if self.mounted {
            ViewportChange::Resized
        } else {
            ViewportChange::Unchanged
        }
    }

    /// Forgets the mount; later observations only record the size.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_before_mount() {
        let tracker = ViewportTracker::default();
        assert_eq!(tracker.size(), Size::new(600.0, 400.0));
        assert!(!tracker.is_ready());
    }

    #[test]
    fn test_mount_captures_size() {
        let mut tracker = ViewportTracker::default();

        assert_eq!(tracker.mount(Size::new(800.0, 500.0)), ViewportChange::Resized);
        assert_eq!(tracker.size(), Size::new(800.0, 500.0));
        assert!(tracker.is_ready());
    }

    #[test]
    fn test_same_size_is_unchanged() {
        let mut tracker = ViewportTracker::default();
        tracker.mount(Size::new(800.0, 500.0));

        assert_eq!(tracker.observe(Size::new(800.0, 500.0)), ViewportChange::Unchanged);
        assert!(tracker.observe(Size::new(801.0, 500.0)).needs_rebuild());
    }

    #[test]
    fn test_degenerate_size_is_recorded_without_rebuild() {
        let mut tracker = ViewportTracker::default();
        tracker.mount(Size::new(800.0, 500.0));

        assert_eq!(tracker.observe(Size::new(0.0, 500.0)), ViewportChange::Degenerate);
        assert_eq!(tracker.size(), Size::new(0.0, 500.0));
        assert!(!tracker.is_ready());

        assert_eq!(tracker.observe(Size::new(800.0, 500.0)), ViewportChange::Resized);
        assert!(tracker.is_ready());
    }

    #[test]
    fn test_degenerate_mount() {
        let mut tracker = ViewportTracker::default();
        assert_eq!(tracker.mount(Size::new(-1.0, 10.0)), ViewportChange::Degenerate);
        assert!(tracker.is_mounted());
        assert!(!tracker.is_ready());
    }

    #[test]
    fn test_resize_before_mount_only_records() {
        let mut tracker = ViewportTracker::default();
        assert_eq!(tracker.observe(Size::new(300.0, 300.0)), ViewportChange::Unchanged);
        assert_eq!(tracker.size(), Size::new(300.0, 300.0));
    }
}
