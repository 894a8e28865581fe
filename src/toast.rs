//! State of the single on-screen notification, independent of how it is drawn.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "fa-info-circle",
            Severity::Success => "fa-check-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
}

impl Phase {
    pub fn transform(self) -> &'static str {
        match self {
            Phase::Visible => "translateX(0)",
            Phase::Entering | Phase::Exiting => "translateX(150%)",
        }
    }
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub phase: Phase,
}

/// Holds at most one toast. Every transition is addressed by id so a timer
/// belonging to a replaced toast cannot touch its successor.
#[derive(Debug, Default)]
pub struct ToastSlot {
    next_id: ToastId,
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Replaces whatever is showing with a new toast in the `Entering` phase.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        created_at: DateTime<Utc>,
    ) -> ToastId {
        self.next_id += 1;
        self.current = Some(Toast {
            id: self.next_id,
            message: message.into(),
            severity,
            created_at,
            phase: Phase::Entering,
        });
        self.next_id
    }

    pub fn reveal(&mut self, id: ToastId) -> bool {
        self.transition(id, Phase::Entering, Phase::Visible)
    }

    /// Starts the exit transition. False when the toast is gone or already leaving.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase != Phase::Exiting => {
                toast.phase = Phase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Detaches the toast; a second call for the same id finds nothing.
    pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current.take()
        } else {
            None
        }
    }

    fn transition(&mut self, id: ToastId, from: Phase, to: Phase) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase == from => {
                toast.phase = to;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn severity_defaults_to_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Success.icon(), "fa-check-circle");
        assert_eq!(Severity::Info.icon(), "fa-info-circle");
    }

    #[test]
    fn second_show_replaces_the_first() {
        let mut slot = ToastSlot::default();
        let first = slot.show("first", Severity::Info, now());
        let second = slot.show("second", Severity::Success, now());

        assert_ne!(first, second);
        let toast = slot.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Success);
        assert_eq!(toast.phase, Phase::Entering);
    }

    #[test]
    fn auto_dismiss_then_exit_leaves_nothing() {
        let mut slot = ToastSlot::default();
        let id = slot.show("hello", Severity::Info, now());
        assert!(slot.reveal(id));
        assert_eq!(slot.current().unwrap().phase.transform(), "translateX(0)");

        assert!(slot.dismiss(id));
        assert_eq!(slot.current().unwrap().phase, Phase::Exiting);
        assert_eq!(slot.current().unwrap().phase.transform(), "translateX(150%)");

        let removed = slot.remove(id).unwrap();
        assert_eq!(removed.message, "hello");
        assert!(slot.current().is_none());
    }

    #[test]
    fn manual_dismiss_makes_the_late_timer_a_no_op() {
        let mut slot = ToastSlot::default();
        let id = slot.show("hello", Severity::Info, now());
        slot.reveal(id);

        assert!(slot.dismiss(id));
        assert!(!slot.dismiss(id));
        assert!(slot.remove(id).is_some());
        assert!(!slot.dismiss(id));
        assert!(slot.remove(id).is_none());
    }

    #[test]
    fn stale_timers_do_not_touch_the_replacement() {
        let mut slot = ToastSlot::default();
        let old = slot.show("old", Severity::Info, now());
        slot.dismiss(old);
        let new = slot.show("new", Severity::Info, now());

        assert!(slot.remove(old).is_none());
        assert!(!slot.reveal(old));
        assert_eq!(slot.current().unwrap().id, new);
    }

    #[test]
    fn reveal_after_early_dismiss_does_not_bring_it_back() {
        let mut slot = ToastSlot::default();
        let id = slot.show("quick", Severity::Info, now());
        slot.dismiss(id);
        assert!(!slot.reveal(id));
        assert_eq!(slot.current().unwrap().phase, Phase::Exiting);
    }
}
