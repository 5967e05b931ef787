//! Reply messages written to a notification's reply slot.
//!
//! A [`ReplyMessage`] is what the waiting caller eventually receives: either
//! as the deferred `notify_img` response body, or as the JSON body of the
//! outbound `put_control` call in immediate mode.

use serde::{Deserialize, Serialize};

use crate::face::FaceData;

// ---------------------------------------------------------------------------
// ReviewCommand
// ---------------------------------------------------------------------------

/// Terminal operator commands, with their exact wire spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewCommand {
    /// Operator accepted the face data (possibly after edits).
    #[serde(rename = "submit")]
    Submit,
    /// Operator asked the recognizer to process the image again.
    #[serde(rename = "process_again")]
    RecognizeAgain,
    /// Operator discarded the image.
    #[serde(rename = "cancel")]
    Cancel,
}

impl ReviewCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewCommand::Submit => "submit",
            ReviewCommand::RecognizeAgain => "process_again",
            ReviewCommand::Cancel => "cancel",
        }
    }
}

// ---------------------------------------------------------------------------
// ReplyMessage
// ---------------------------------------------------------------------------

/// Message headers carried on every protocol reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeaders {
    /// Address of the service that produced the message.
    pub src_addr: String,
}

/// The operator's decision for one notification.
///
/// Written to the reply slot at most once per session. `faces_data` carries
/// the (possibly edited) face list for submit and recognize-again; a cancel
/// carries no face data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyMessage {
    pub headers: MessageHeaders,
    /// Correlation id of the originating notification, echoed verbatim.
    pub id: String,
    pub cmd: ReviewCommand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faces_data: Option<Vec<FaceData>>,
}

impl ReplyMessage {
    pub fn submit(src_addr: &str, id: &str, faces_data: Vec<FaceData>) -> Self {
        Self {
            headers: MessageHeaders {
                src_addr: src_addr.to_string(),
            },
            id: id.to_string(),
            cmd: ReviewCommand::Submit,
            faces_data: Some(faces_data),
        }
    }

    pub fn recognize_again(src_addr: &str, id: &str, faces_data: Vec<FaceData>) -> Self {
        Self {
            headers: MessageHeaders {
                src_addr: src_addr.to_string(),
            },
            id: id.to_string(),
            cmd: ReviewCommand::RecognizeAgain,
            faces_data: Some(faces_data),
        }
    }

    pub fn cancel(src_addr: &str, id: &str) -> Self {
        Self {
            headers: MessageHeaders {
                src_addr: src_addr.to_string(),
            },
            id: id.to_string(),
            cmd: ReviewCommand::Cancel,
            faces_data: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
