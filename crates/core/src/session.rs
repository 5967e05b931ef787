//! The per-notification review session state machine.
//!
//! `Open -> {Submitted | RecognizeAgain | Cancelled}`; all three target
//! states are terminal and `Open` is the only non-terminal state. A session
//! accepts exactly one terminal action; anything after that is rejected so
//! the reply slot can never be written twice.

use crate::error::CoreError;
use crate::face::FaceData;
use crate::notification::Notification;
use crate::reply::ReplyMessage;
use crate::types::{SessionId, Timestamp};

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Review session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Awaiting an operator decision.
    Open,
    /// Operator accepted the face data.
    Submitted,
    /// Operator requested reprocessing.
    RecognizeAgain,
    /// Operator discarded the image.
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Open)
    }
}

// ---------------------------------------------------------------------------
// TerminalAction
// ---------------------------------------------------------------------------

/// The three ways an operator can end a session.
///
/// Submit and recognize-again optionally carry the operator's edited face
/// list; `None` means "use the face data as received".
#[derive(Debug, Clone)]
pub enum TerminalAction {
    Submit(Option<Vec<FaceData>>),
    RecognizeAgain(Option<Vec<FaceData>>),
    Cancel,
}

// ---------------------------------------------------------------------------
// ReviewSession
// ---------------------------------------------------------------------------

/// One operator review of a single notification.
#[derive(Debug)]
pub struct ReviewSession {
    session_id: SessionId,
    /// Arrival sequence number; listing order is FIFO by this value.
    seq: u64,
    opened_at: Timestamp,
    state: SessionState,
    notification: Notification,
}

impl ReviewSession {
    /// Open a session for a freshly arrived notification.
    pub fn new(session_id: SessionId, seq: u64, notification: Notification) -> Self {
        Self {
            session_id,
            seq,
            opened_at: chrono::Utc::now(),
            state: SessionState::Open,
            notification,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Apply a terminal action and produce the reply message for the slot.
    ///
    /// Edited face data (when supplied) is written back into the
    /// notification before the reply is built, so submit and
    /// recognize-again report the operator's final view of the image.
    ///
    /// Returns `CoreError::Conflict` if the session has already been
    /// resolved; the caller must not write the reply slot in that case.
    pub fn resolve(
        &mut self,
        action: TerminalAction,
        src_addr: &str,
    ) -> Result<ReplyMessage, CoreError> {
        if self.state.is_terminal() {
            return Err(CoreError::Conflict(format!(
                "review session {} has already been resolved",
                self.session_id
            )));
        }

        let id = self.notification.id.clone();
        let reply = match action {
            TerminalAction::Submit(edited) => {
                if let Some(faces) = edited {
                    self.notification.faces_data = faces;
                }
                self.state = SessionState::Submitted;
                ReplyMessage::submit(src_addr, &id, self.notification.faces_data.clone())
            }
            TerminalAction::RecognizeAgain(edited) => {
                if let Some(faces) = edited {
                    self.notification.faces_data = faces;
                }
                self.state = SessionState::RecognizeAgain;
                ReplyMessage::recognize_again(src_addr, &id, self.notification.faces_data.clone())
            }
            TerminalAction::Cancel => {
                self.state = SessionState::Cancelled;
                ReplyMessage::cancel(src_addr, &id)
            }
        };

        Ok(reply)
    }

    /// Check whether the session may be closed without a decision.
    ///
    /// An open session must not be silently discarded: the caller is kept
    /// waiting on the reply slot until one of the three terminal actions is
    /// taken.
    pub fn ensure_closeable(&self) -> Result<(), CoreError> {
        if self.state.is_terminal() {
            Ok(())
        } else {
            Err(CoreError::Conflict(format!(
                "review session {} is still awaiting a decision",
                self.session_id
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
