//! Request handlers for the notification protocol and the operator review
//! surface.
//!
//! `notify` speaks the fixed notification protocol (envelope shapes in
//! [`crate::protocol`]); `review` is the operator-facing API and uses the
//! standard `{ "data": ... }` envelope with [`crate::error::AppError`]
//! mapping.

pub mod notify;
pub mod review;
