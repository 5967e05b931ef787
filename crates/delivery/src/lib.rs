//! Outbound delivery of operator decisions.
//!
//! In immediate-response mode the `notify_img` handler acknowledges at once
//! and a forwarding task later pushes the operator's [`ReplyMessage`] to the
//! caller's `put_control` endpoint. This crate holds that client.

pub mod put_control;

pub use put_control::{ControlDelivery, DeliveryError, PUT_CONTROL_PATH};
