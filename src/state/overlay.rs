//! One-shot informational overlay

/// Lifecycle of the notice shown when the page is first mounted.
///
/// `shown` only ever goes from false to true; mounting again is a no-op.
#[derive(Debug, Clone, Default)]
pub struct InfoOverlay {
    shown: bool,
    visible: bool,
}

impl InfoOverlay {
    /// Show the overlay if this instance has never shown it. Returns true if it
    /// was shown by this call.
    pub fn mount(&mut self) -> bool {
        if self.shown {
            return false;
        }
        self.shown = true;
        self.visible = true;
        true
    }

    /// Remove the overlay. Returns true if it was visible.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// True while the overlay captures input
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn was_shown(&self) -> bool {
        self.shown
    }
}
