//! Open/close choreography shared by the content modals.
//!
//! A modal moves `Closed -> Opening -> Open -> Closing -> Closed`. The
//! `Opening` and `Closing` phases end when a deferred settle arrives carrying
//! the epoch of the transition that scheduled it; settles from an older
//! transition are ignored.

pub const SHOW_DELAY_MS: u32 = 10;
pub const FOCUS_DELAY_MS: u32 = 100;
pub const CLOSE_DURATION_MS: u32 = 380;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    Close,
    Escape,
    Settle(u32),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalMachine {
    phase: ModalPhase,
    epoch: u32,
}

impl ModalMachine {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn open(&mut self) -> bool {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => false,
            ModalPhase::Closed | ModalPhase::Closing => {
                self.begin(ModalPhase::Opening);
                true
            }
        }
    }

    pub fn close(&mut self) -> bool {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => false,
            ModalPhase::Opening | ModalPhase::Open => {
                self.begin(ModalPhase::Closing);
                true
            }
        }
    }

    /// Escape only dismisses a modal that is fully shown.
    pub fn escape(&mut self) -> bool {
        self.phase == ModalPhase::Open && self.close()
    }

    pub fn settle(&mut self, epoch: u32) -> bool {
        if epoch != self.epoch {
            return false;
        }
        let next = match self.phase {
            ModalPhase::Opening => ModalPhase::Open,
            ModalPhase::Closing => ModalPhase::Closed,
            ModalPhase::Closed | ModalPhase::Open => return false,
        };
        self.phase = next;
        true
    }

    /// Returns whether the action changed the phase.
    pub fn apply(&mut self, action: ModalAction) -> bool {
        match action {
            ModalAction::Open => self.open(),
            ModalAction::Close => self.close(),
            ModalAction::Escape => self.escape(),
            ModalAction::Settle(epoch) => self.settle(epoch),
        }
    }

    fn begin(&mut self, phase: ModalPhase) {
        self.phase = phase;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Whether the modal takes part in layout at all.
    pub fn is_displayed(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// The `show` marker that drives the fade/scale-in transition.
    pub fn is_shown(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// The `closing` marker on the inner content.
    pub fn is_closing(&self) -> bool {
        self.phase == ModalPhase::Closing
    }

    pub fn is_hidden_from_assistive_tech(&self) -> bool {
        matches!(self.phase, ModalPhase::Closed | ModalPhase::Closing)
    }

    /// Page scrolling stays locked until the close transition has finished.
    pub fn holds_scroll_lock(&self) -> bool {
        self.phase != ModalPhase::Closed
    }
}

/// Reference-counted page scroll lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    pub fn from_holders<I>(holders: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut lock = Self::default();
        for held in holders {
            if held {
                lock.acquire();
            }
        }
        lock
    }

    pub fn acquire(&mut self) {
        self.holders += 1;
    }

    #[cfg(test)]
    pub fn release(&mut self) {
        self.holders = self.holders.saturating_sub(1);
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> ModalMachine {
        let mut modal = ModalMachine::default();
        assert!(modal.open());
        assert!(modal.settle(modal.epoch()));
        modal
    }

    #[test]
    fn starts_closed_and_hidden() {
        let modal = ModalMachine::default();
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.is_displayed());
        assert!(modal.is_hidden_from_assistive_tech());
        assert!(!modal.holds_scroll_lock());
    }

    #[test]
    fn opening_is_displayed_before_show_marker() {
        let mut modal = ModalMachine::default();
        modal.open();
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert!(modal.is_displayed());
        assert!(!modal.is_shown());
        assert!(!modal.is_hidden_from_assistive_tech());
        assert!(modal.holds_scroll_lock());
    }

    #[test]
    fn close_keeps_layout_until_settled() {
        let mut modal = opened();
        assert!(modal.close());
        assert!(modal.is_displayed());
        assert!(modal.is_closing());
        assert!(!modal.is_shown());
        assert!(modal.is_hidden_from_assistive_tech());
        assert!(modal.holds_scroll_lock());

        assert!(modal.settle(modal.epoch()));
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.is_closing());
        assert!(!modal.holds_scroll_lock());
    }

    #[test]
    fn reopen_during_close_ignores_stale_settle() {
        let mut modal = opened();
        modal.close();
        let closing_epoch = modal.epoch();

        assert!(modal.open());
        assert!(!modal.is_closing());
        assert!(!modal.settle(closing_epoch));
        assert_eq!(modal.phase(), ModalPhase::Opening);

        assert!(modal.settle(modal.epoch()));
        assert!(modal.is_shown());
        assert!(modal.holds_scroll_lock());
    }

    #[test]
    fn open_close_open_returns_to_open() {
        let mut modal = opened();
        modal.close();
        modal.settle(modal.epoch());
        modal.open();
        modal.settle(modal.epoch());
        assert_eq!(modal.phase(), ModalPhase::Open);
        assert!(!modal.is_closing());
        assert!(ScrollLock::from_holders([modal.holds_scroll_lock()]).is_locked());
    }

    #[test]
    fn redundant_calls_are_no_ops() {
        let mut modal = opened();
        let epoch = modal.epoch();
        assert!(!modal.open());
        assert_eq!(modal.epoch(), epoch);

        modal.close();
        assert!(!modal.close());

        let mut closed = ModalMachine::default();
        assert!(!closed.close());
        assert!(!closed.settle(closed.epoch()));
    }

    #[test]
    fn escape_closes_only_open_modals() {
        let mut testimonial = ModalMachine::default();
        let mut project = ModalMachine::default();
        assert!(!testimonial.escape());
        assert!(!project.escape());

        project = opened();
        assert!(!testimonial.escape());
        assert!(project.escape());
        assert_eq!(testimonial.phase(), ModalPhase::Closed);
        assert_eq!(project.phase(), ModalPhase::Closing);
    }

    #[test]
    fn escape_ignores_modal_still_opening() {
        let mut modal = ModalMachine::default();
        modal.open();
        assert!(!modal.escape());
        assert_eq!(modal.phase(), ModalPhase::Opening);
    }

    #[test]
    fn apply_follows_full_choreography() {
        let mut modal = ModalMachine::default();
        assert!(!modal.apply(ModalAction::Close));
        assert!(modal.apply(ModalAction::Open));
        assert!(!modal.apply(ModalAction::Escape));
        assert!(modal.apply(ModalAction::Settle(modal.epoch())));
        assert!(modal.is_shown());

        assert!(modal.apply(ModalAction::Escape));
        let closing = modal.epoch();
        assert!(!modal.apply(ModalAction::Settle(closing.wrapping_sub(1))));
        assert!(modal.is_closing());
        assert!(modal.apply(ModalAction::Settle(closing)));
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.apply(ModalAction::Settle(closing)));
    }

    #[test]
    fn scroll_lock_stacks_across_modals() {
        let mut lock = ScrollLock::default();
        lock.acquire();
        lock.acquire();
        lock.release();
        assert!(lock.is_locked());
        lock.release();
        assert!(!lock.is_locked());
        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn closing_one_of_two_modals_keeps_page_locked() {
        let mut first = opened();
        let second = opened();
        first.close();
        first.settle(first.epoch());
        let lock = ScrollLock::from_holders([first.holds_scroll_lock(), second.holds_scroll_lock()]);
        assert!(lock.is_locked());
    }
}
