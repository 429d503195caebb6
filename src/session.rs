//! Entity-management session state machine.
//!
//! Every directory view runs the same modal lifecycle: list, inspect one
//! record, edit or create, confirm a destructive action. Instead of a
//! separate flag set per view, the lifecycle is one state machine with
//! explicit transitions. Invalid transitions are rejected; completions
//! that arrive after the session closed are tolerated as no-ops.

use crate::{Error, Result};

/// Where an entity session currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Viewing(i64),
    Editing(i64),
    Creating,
    ConfirmingDelete(i64),
    Failed(String),
}

/// One view's session: current state plus a re-entrancy guard for
/// in-flight mutations.
#[derive(Debug)]
pub struct EntitySession {
    state: SessionState,
    busy: bool,
    closed: bool,
}

impl Default for EntitySession {
    fn default() -> Self {
        Self::new()
    }
}

impl EntitySession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            busy: false,
            closed: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn invalid(&self, action: &str) -> Error {
        Error::InvalidInput(format!("cannot {} from {:?}", action, self.state))
    }

    /// Start a load. Allowed from `Idle` and from `Failed` (retry is a
    /// deliberate user action).
    pub fn begin_load(&mut self) -> Result<()> {
        match self.state {
            SessionState::Idle | SessionState::Failed(_) => {
                self.state = SessionState::Loading;
                Ok(())
            }
            _ => Err(self.invalid("begin load")),
        }
    }

    /// A load completed. No-op after close.
    pub fn load_succeeded(&mut self) {
        if self.closed {
            return;
        }
        if self.state == SessionState::Loading {
            self.state = SessionState::Idle;
        }
    }

    /// A load failed. No-op after close.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        if self.closed {
            return;
        }
        if self.state == SessionState::Loading {
            self.state = SessionState::Failed(message.into());
        }
    }

    pub fn view(&mut self, id: i64) -> Result<()> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Viewing(id);
                Ok(())
            }
            _ => Err(self.invalid("open detail")),
        }
    }

    pub fn edit(&mut self, id: i64) -> Result<()> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Editing(id);
                Ok(())
            }
            SessionState::Viewing(current) if current == id => {
                self.state = SessionState::Editing(id);
                Ok(())
            }
            _ => Err(self.invalid("edit")),
        }
    }

    pub fn create(&mut self) -> Result<()> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Creating;
                Ok(())
            }
            _ => Err(self.invalid("create")),
        }
    }

    /// Enter the confirmation step for a destructive action. The actual
    /// mutation requires a second, separate action after this.
    pub fn confirm_delete(&mut self, id: i64) -> Result<()> {
        match self.state {
            SessionState::Idle | SessionState::Viewing(_) => {
                self.state = SessionState::ConfirmingDelete(id);
                Ok(())
            }
            _ => Err(self.invalid("confirm delete")),
        }
    }

    /// Dismiss any modal state. In-flight loads cannot be cancelled.
    pub fn cancel(&mut self) -> Result<()> {
        match self.state {
            SessionState::Loading => Err(self.invalid("cancel")),
            _ => {
                self.state = SessionState::Idle;
                Ok(())
            }
        }
    }

    /// Re-entrancy guard: returns false (and changes nothing) when a
    /// mutation is already in flight, so duplicate dispatch is a no-op.
    pub fn try_begin_mutation(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// A mutation completed. Tolerated after close.
    pub fn finish_mutation(&mut self) {
        self.busy = false;
        if !self.closed {
            self.state = SessionState::Idle;
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The view unmounted. Late completions become no-ops.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cycle() {
        let mut session = EntitySession::new();
        session.begin_load().unwrap();
        assert_eq!(*session.state(), SessionState::Loading);
        session.load_succeeded();
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_failed_load_allows_retry() {
        let mut session = EntitySession::new();
        session.begin_load().unwrap();
        session.load_failed("quota exceeded");
        assert!(matches!(session.state(), SessionState::Failed(_)));
        // Retry is a deliberate action from the failed state
        session.begin_load().unwrap();
        assert_eq!(*session.state(), SessionState::Loading);
    }

    #[test]
    fn test_double_load_rejected() {
        let mut session = EntitySession::new();
        session.begin_load().unwrap();
        assert!(session.begin_load().is_err());
    }

    #[test]
    fn test_view_then_edit_same_record() {
        let mut session = EntitySession::new();
        session.view(7).unwrap();
        session.edit(7).unwrap();
        assert_eq!(*session.state(), SessionState::Editing(7));
    }

    #[test]
    fn test_edit_different_record_from_viewing_rejected() {
        let mut session = EntitySession::new();
        session.view(7).unwrap();
        assert!(session.edit(8).is_err());
    }

    #[test]
    fn test_delete_requires_confirmation_state() {
        let mut session = EntitySession::new();
        session.view(3).unwrap();
        session.confirm_delete(3).unwrap();
        assert_eq!(*session.state(), SessionState::ConfirmingDelete(3));
        session.cancel().unwrap();
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_busy_guard_blocks_duplicate_dispatch() {
        let mut session = EntitySession::new();
        assert!(session.try_begin_mutation());
        assert!(!session.try_begin_mutation());
        session.finish_mutation();
        assert!(session.try_begin_mutation());
    }

    #[test]
    fn test_late_completion_after_close_is_noop() {
        let mut session = EntitySession::new();
        session.begin_load().unwrap();
        session.close();
        session.load_failed("too late");
        // State is frozen, not failed
        assert_eq!(*session.state(), SessionState::Loading);
    }

    #[test]
    fn test_cannot_cancel_inflight_load() {
        let mut session = EntitySession::new();
        session.begin_load().unwrap();
        assert!(session.cancel().is_err());
    }
}
