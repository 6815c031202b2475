use log::{debug, warn};

use super::document::PresentationTarget;

/// Single-instance horizontal line that follows the pointer.
pub struct ReadingGuide<G> {
    active: Option<G>,
}

impl<G> Default for ReadingGuide<G> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<G> ReadingGuide<G> {
    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    pub fn enable<T>(&mut self, target: &mut T)
    where
        T: PresentationTarget<Guide = G>,
    {
        if self.active.is_some() {
            return;
        }
        self.active = target.mount_guide();
        if self.active.is_some() {
            debug!("reading guide mounted");
        } else {
            warn!("reading guide could not be mounted");
        }
    }

    pub fn disable<T>(&mut self, target: &mut T)
    where
        T: PresentationTarget<Guide = G>,
    {
        if let Some(guide) = self.active.take() {
            target.unmount_guide(guide);
            debug!("reading guide removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::testing::MemoryDocument;

    #[test]
    fn enabling_twice_mounts_once() {
        let mut doc = MemoryDocument::default();
        let mut guide = ReadingGuide::default();
        guide.enable(&mut doc);
        guide.enable(&mut doc);
        assert!(guide.is_enabled());
        assert_eq!(doc.guide_elements, 1);
        assert_eq!(doc.pointer_listeners, 1);
    }

    #[test]
    fn disabling_when_never_enabled_is_a_no_op() {
        let mut doc = MemoryDocument::default();
        let mut guide: ReadingGuide<u32> = ReadingGuide::default();
        guide.disable(&mut doc);
        assert!(!guide.is_enabled());
        assert_eq!(doc.guide_elements, 0);
    }

    #[test]
    fn disable_removes_overlay_and_listener() {
        let mut doc = MemoryDocument::default();
        let mut guide = ReadingGuide::default();
        guide.enable(&mut doc);
        guide.disable(&mut doc);
        guide.disable(&mut doc);
        assert_eq!(doc.guide_elements, 0);
        assert_eq!(doc.pointer_listeners, 0);

        guide.enable(&mut doc);
        assert_eq!(doc.guide_elements, 1);
    }
}
