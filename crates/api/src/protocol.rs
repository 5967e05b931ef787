//! Wire types for the notification protocol surface.
//!
//! Request fields are all optional at the parsing layer so that an
//! incomplete body can still echo whatever correlation id it carried in the
//! error envelope; completeness is enforced by
//! [`NotifyImgRequest::into_notification`].

use serde::{Deserialize, Serialize};

use controlpanel_core::face::FaceData;
use controlpanel_core::notification::Notification;
use controlpanel_core::reply::MessageHeaders;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// The `headers` object of an incoming notification.
#[derive(Debug, Deserialize)]
pub struct RequestHeaders {
    /// Callback address of the caller.
    pub src_addr: Option<String>,
    /// Per-request override of the server's immediate-response mode.
    #[serde(default)]
    pub immed: Option<bool>,
}

/// `PUT /api/v1/notify_img` request body.
#[derive(Debug, Deserialize)]
pub struct NotifyImgRequest {
    pub headers: Option<RequestHeaders>,
    pub id: Option<String>,
    pub img_buff: Option<String>,
    pub faces_data: Option<Vec<FaceData>>,
}

/// A rejected notification: which fields were absent, plus whatever
/// correlation id could be parsed for echoing.
#[derive(Debug)]
pub struct MissingFields {
    pub id_echo: String,
    pub error_info: String,
}

impl NotifyImgRequest {
    /// Validate required fields and build the [`Notification`].
    ///
    /// There is no partial success: any missing field rejects the whole
    /// request, naming every absent field in `error_info`.
    pub fn into_notification(self) -> Result<Notification, MissingFields> {
        let id_echo = self.id.clone().unwrap_or_default();

        let src_addr = self.headers.as_ref().and_then(|h| h.src_addr.clone());

        let mut missing = Vec::new();
        if src_addr.is_none() {
            missing.push("headers.src_addr");
        }
        if self.id.is_none() {
            missing.push("id");
        }
        if self.img_buff.is_none() {
            missing.push("img_buff");
        }
        if self.faces_data.is_none() {
            missing.push("faces_data");
        }

        match (src_addr, self.id, self.img_buff, self.faces_data) {
            (Some(src_addr), Some(id), Some(img_buff), Some(faces_data)) => {
                let immed = self.headers.and_then(|h| h.immed);
                Ok(Notification::new(id, src_addr, immed, img_buff, faces_data))
            }
            _ => Err(MissingFields {
                id_echo,
                error_info: format!("missing required fields: {}", missing.join(", ")),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Success acknowledgement: `{headers, id}`.
#[derive(Debug, Serialize)]
pub struct AckEnvelope {
    pub headers: MessageHeaders,
    pub id: String,
}

/// Protocol error envelope: `{headers, id, error: true, error_info}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub headers: MessageHeaders,
    pub id: String,
    pub error: bool,
    pub error_info: String,
}

impl ErrorEnvelope {
    pub fn new(src_addr: &str, id: &str, error_info: impl Into<String>) -> Self {
        Self {
            headers: MessageHeaders {
                src_addr: src_addr.to_string(),
            },
            id: id.to_string(),
            error: true,
            error_info: error_info.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
