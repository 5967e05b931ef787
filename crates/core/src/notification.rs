//! Incoming image notifications.

use serde::Serialize;

use crate::face::FaceData;
use crate::types::Timestamp;

/// One analyzed image awaiting operator review.
///
/// Created when a `notify_img` request arrives, consumed exactly once by a
/// review session, and discarded after a terminal decision is recorded.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    /// Caller-supplied correlation id, echoed verbatim in every response.
    pub id: String,
    /// Callback address of the caller (used by immediate-mode forwarding).
    pub src_addr: String,
    /// Per-request override of the server's immediate-response flag.
    pub immed: Option<bool>,
    /// Base64-encoded PNG. Carried as an opaque string, never decoded.
    pub img_buff: String,
    /// Detected face regions, in recognizer order.
    pub faces_data: Vec<FaceData>,
    /// When the notification arrived (UTC).
    pub received_at: Timestamp,
}

impl Notification {
    /// Build a notification stamped with the current time.
    pub fn new(
        id: String,
        src_addr: String,
        immed: Option<bool>,
        img_buff: String,
        faces_data: Vec<FaceData>,
    ) -> Self {
        Self {
            id,
            src_addr,
            immed,
            img_buff,
            faces_data,
            received_at: chrono::Utc::now(),
        }
    }
}
