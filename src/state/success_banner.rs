//! Success banner shown after an accepted submission

/// Transient "submitted" flag.
///
/// Each `show` bumps the generation; an expiry only clears the banner when it
/// carries the current generation, so an older timer never hides a newer banner.
#[derive(Debug, Clone, Default)]
pub struct SuccessBanner {
    visible: bool,
    generation: u64,
}

impl SuccessBanner {
    /// Show the banner and return the generation its expiry must carry
    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.generation
    }

    /// Hide the banner if `generation` is current. Returns true if it was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if !self.visible || generation != self.generation {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let banner = SuccessBanner::default();
        assert!(!banner.is_visible());
        assert_eq!(banner.generation(), 0);
    }

    #[test]
    fn test_show_then_expire() {
        let mut banner = SuccessBanner::default();
        let generation = banner.show();
        assert!(banner.is_visible());
        assert!(banner.expire(generation));
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut banner = SuccessBanner::default();
        let first = banner.show();
        let second = banner.show();
        assert_ne!(first, second);
        assert!(!banner.expire(first));
        assert!(banner.is_visible());
        assert!(banner.expire(second));
    }

    #[test]
    fn test_expire_when_hidden_is_noop() {
        let mut banner = SuccessBanner::default();
        assert!(!banner.expire(0));
    }
}
