use std::sync::Arc;

use controlpanel_delivery::ControlDelivery;
use controlpanel_review::ReviewManager;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Review session registry (the single owner of all open sessions).
    pub reviews: Arc<ReviewManager>,
    /// Outbound `put_control` client used by immediate-mode forwarding.
    pub delivery: Arc<ControlDelivery>,
}
