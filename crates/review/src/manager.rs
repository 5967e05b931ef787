//! The review session registry and its reply slots.
//!
//! [`ReviewManager`] is the single owner of all open sessions, keyed by a
//! generated [`SessionId`]. Each session carries the write half of a
//! [`tokio::sync::oneshot`] reply slot; the listener (or its forwarding
//! task) holds the read half. A terminal action removes the session from the
//! registry and writes the slot exactly once.
//!
//! Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
//! shared between the listener and the operator surface.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::{oneshot, RwLock};

use controlpanel_core::face::FaceData;
use controlpanel_core::notification::Notification;
use controlpanel_core::reply::ReplyMessage;
use controlpanel_core::session::{ReviewSession, TerminalAction};
use controlpanel_core::types::{SessionId, Timestamp};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors surfaced by the session registry.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// No open session with this id. Also the outcome of a second terminal
    /// action: the first one removed the session, so the reply slot is
    /// provably untouched by the repeat.
    #[error("Review session {0} not found")]
    SessionNotFound(SessionId),

    /// The session still awaits a decision and must not be discarded.
    #[error("Review session {0} is still awaiting a decision")]
    StillOpen(SessionId),

    /// Registry invariant violation; should never happen.
    #[error("Internal review error: {0}")]
    Internal(String),
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// One row of the open-session listing.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    /// Correlation id of the underlying notification.
    pub id: String,
    pub face_count: usize,
    pub opened_at: Timestamp,
}

/// Everything an operator front-end needs to render one session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub id: String,
    pub src_addr: String,
    pub img_buff: String,
    pub faces_data: Vec<FaceData>,
    pub opened_at: Timestamp,
}

// ---------------------------------------------------------------------------
// ReviewManager
// ---------------------------------------------------------------------------

/// Bookkeeping for one open session: the state machine plus the write half
/// of its reply slot.
struct OpenSession {
    session: ReviewSession,
    slot: oneshot::Sender<ReplyMessage>,
}

/// Owns all open review sessions.
pub struct ReviewManager {
    /// Advertised address of this service, stamped into reply headers.
    src_addr: String,
    /// Monotonic arrival counter; listing order is FIFO by this value.
    next_seq: AtomicU64,
    sessions: RwLock<HashMap<SessionId, OpenSession>>,
}

impl ReviewManager {
    pub fn new(src_addr: impl Into<String>) -> Self {
        Self {
            src_addr: src_addr.into(),
            next_seq: AtomicU64::new(0),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a session for a freshly arrived notification.
    ///
    /// Returns the session summary and the read half of the reply slot. The
    /// registry write lock is held only for the insertion, so the calling
    /// listener task is never blocked behind an operator decision.
    pub async fn open(
        &self,
        notification: Notification,
    ) -> (SessionSummary, oneshot::Receiver<ReplyMessage>) {
        let session_id = uuid::Uuid::new_v4();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let (slot_tx, slot_rx) = oneshot::channel();

        let session = ReviewSession::new(session_id, seq, notification);
        let summary = summarize(&session);

        self.sessions.write().await.insert(
            session_id,
            OpenSession {
                session,
                slot: slot_tx,
            },
        );

        tracing::info!(
            session_id = %session_id,
            id = %summary.id,
            face_count = summary.face_count,
            "Review session opened"
        );

        (summary, slot_rx)
    }

    /// List open sessions in arrival (FIFO) order.
    pub async fn list(&self) -> Vec<SessionSummary> {
        let sessions = self.sessions.read().await;
        let mut entries: Vec<_> = sessions.values().collect();
        entries.sort_by_key(|e| e.session.seq());
        entries.iter().map(|e| summarize(&e.session)).collect()
    }

    /// Full view of one open session.
    pub async fn get(&self, session_id: SessionId) -> Result<SessionView, ReviewError> {
        let sessions = self.sessions.read().await;
        let entry = sessions
            .get(&session_id)
            .ok_or(ReviewError::SessionNotFound(session_id))?;

        let n = entry.session.notification();
        Ok(SessionView {
            session_id,
            id: n.id.clone(),
            src_addr: n.src_addr.clone(),
            img_buff: n.img_buff.clone(),
            faces_data: n.faces_data.clone(),
            opened_at: entry.session.opened_at(),
        })
    }

    /// Current face list of one open session (for local export).
    pub async fn faces(&self, session_id: SessionId) -> Result<Vec<FaceData>, ReviewError> {
        let sessions = self.sessions.read().await;
        let entry = sessions
            .get(&session_id)
            .ok_or(ReviewError::SessionNotFound(session_id))?;
        Ok(entry.session.notification().faces_data.clone())
    }

    /// Apply a terminal action to a session.
    ///
    /// The session is removed from the registry and the reply message is
    /// written to its slot. If the slot's reader has already gone away (a
    /// deferred waiter that timed out, or a shutdown race) the decision
    /// still stands; the dropped reader is logged and the reply returned to
    /// the caller as usual.
    pub async fn resolve(
        &self,
        session_id: SessionId,
        action: TerminalAction,
    ) -> Result<ReplyMessage, ReviewError> {
        let removed = {
            let mut sessions = self.sessions.write().await;
            sessions
                .remove(&session_id)
                .ok_or(ReviewError::SessionNotFound(session_id))?
        };

        let OpenSession { mut session, slot } = removed;
        let reply = session
            .resolve(action, &self.src_addr)
            .map_err(|e| ReviewError::Internal(e.to_string()))?;

        tracing::info!(
            session_id = %session_id,
            id = %reply.id,
            cmd = reply.cmd.as_str(),
            "Review session resolved"
        );

        if slot.send(reply.clone()).is_err() {
            tracing::warn!(
                session_id = %session_id,
                id = %reply.id,
                "Reply slot reader gone; decision recorded but not delivered"
            );
        }

        Ok(reply)
    }

    /// Attempt to discard a session without a decision.
    ///
    /// Always rejected while the session is open -- there is no silent
    /// cancel. Resolved sessions are removed by [`resolve`](Self::resolve),
    /// so an id that is no longer present reports `SessionNotFound`.
    pub async fn close(&self, session_id: SessionId) -> Result<(), ReviewError> {
        let sessions = self.sessions.read().await;
        if sessions.contains_key(&session_id) {
            Err(ReviewError::StillOpen(session_id))
        } else {
            Err(ReviewError::SessionNotFound(session_id))
        }
    }

    /// Number of sessions awaiting a decision.
    pub async fn open_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn summarize(session: &ReviewSession) -> SessionSummary {
    let n = session.notification();
    SessionSummary {
        session_id: session.session_id(),
        id: n.id.clone(),
        face_count: n.faces_data.len(),
        opened_at: session.opened_at(),
    }
}
