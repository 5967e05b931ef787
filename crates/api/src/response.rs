//! Shared response envelope types for the operator review API.
//!
//! Review-surface responses use a `{ "data": ... }` envelope. The protocol
//! endpoints (`notify_img`, `confirm_img`) do NOT use this envelope -- their
//! response shapes are fixed by the notification protocol and live in
//! [`crate::protocol`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
