pub const CONTRACTING_MS: u32 = 700;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureAction {
    Toggle,
    FinishContracting(u32),
}

/// Show more / show less state for the secondary skills list.
///
/// Collapsing marks the button container as contracting until the timer for
/// that collapse fires; an older collapse's timer never clears a newer marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
    contracting: Option<u32>,
    epoch: u32,
}

impl Disclosure {
    /// Returns the epoch of the contracting marker when this toggle collapsed.
    pub fn toggle(&mut self) -> Option<u32> {
        self.expanded = !self.expanded;
        if self.expanded {
            return None;
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.contracting = Some(self.epoch);
        self.contracting
    }

    pub fn finish_contracting(&mut self, epoch: u32) -> bool {
        if self.contracting == Some(epoch) {
            self.contracting = None;
            true
        } else {
            false
        }
    }

    /// Returns false only for a contracting timer that no longer applies.
    pub fn apply(&mut self, action: DisclosureAction) -> bool {
        match action {
            DisclosureAction::Toggle => {
                self.toggle();
                true
            }
            DisclosureAction::FinishContracting(epoch) => self.finish_contracting(epoch),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_contracting(&self) -> bool {
        self.contracting.is_some()
    }

    pub fn contracting_epoch(&self) -> Option<u32> {
        self.contracting
    }

    pub fn label(&self) -> &'static str {
        if self.expanded {
            "Show Less"
        } else {
            "Show More"
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let disclosure = Disclosure::default();
        assert!(!disclosure.is_expanded());
        assert_eq!(disclosure.label(), "Show More");
        assert_eq!(disclosure.aria_expanded(), "false");
    }

    #[test]
    fn expanding_sets_label_without_marker() {
        let mut disclosure = Disclosure::default();
        assert_eq!(disclosure.toggle(), None);
        assert!(disclosure.is_expanded());
        assert!(!disclosure.is_contracting());
        assert_eq!(disclosure.label(), "Show Less");
        assert_eq!(disclosure.aria_expanded(), "true");
    }

    #[test]
    fn collapsing_marks_contracting_until_timer() {
        let mut disclosure = Disclosure::default();
        disclosure.toggle();
        let epoch = disclosure.toggle().expect("collapse starts contracting");
        assert!(disclosure.is_contracting());
        assert_eq!(disclosure.label(), "Show More");

        assert!(disclosure.finish_contracting(epoch));
        assert!(!disclosure.is_contracting());
        assert!(!disclosure.finish_contracting(epoch));
    }

    #[test]
    fn stale_timer_keeps_newer_marker() {
        let mut disclosure = Disclosure::default();
        disclosure.toggle();
        let first = disclosure.toggle().expect("first collapse");
        disclosure.toggle();
        let second = disclosure.toggle().expect("second collapse");

        assert!(!disclosure.finish_contracting(first));
        assert!(disclosure.is_contracting());
        assert!(disclosure.finish_contracting(second));
    }

    #[test]
    fn expanding_again_leaves_pending_marker_alone() {
        let mut disclosure = Disclosure::default();
        disclosure.toggle();
        let epoch = disclosure.toggle().expect("collapse");
        disclosure.toggle();
        assert!(disclosure.is_expanded());
        assert_eq!(disclosure.contracting_epoch(), Some(epoch));
    }

    #[test]
    fn apply_ignores_timer_from_earlier_collapse() {
        let mut disclosure = Disclosure::default();
        assert!(disclosure.apply(DisclosureAction::Toggle));
        assert!(disclosure.apply(DisclosureAction::Toggle));
        let first = disclosure.contracting_epoch().expect("first collapse");
        assert!(disclosure.apply(DisclosureAction::Toggle));
        assert!(disclosure.apply(DisclosureAction::Toggle));

        let before = disclosure;
        assert!(!disclosure.apply(DisclosureAction::FinishContracting(first)));
        assert_eq!(disclosure, before);

        let second = disclosure.contracting_epoch().expect("second collapse");
        assert!(disclosure.apply(DisclosureAction::FinishContracting(second)));
        assert!(!disclosure.is_contracting());
    }
}
