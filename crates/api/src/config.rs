/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Advertised address of this service, stamped into reply headers and
    /// error envelopes (default: `http://<host>:<port>`).
    pub src_addr: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `300`).
    ///
    /// Deliberately generous: in deferred mode a `notify_img` request stays
    /// open until a human decides.
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Maximum request body size in bytes (default: 32 MiB; notifications
    /// carry base64 image data inline).
    pub max_request_bytes: usize,
    /// Whether `notify_img` acknowledges immediately and forwards the
    /// decision via `put_control` (default: `false`, i.e. deferred).
    /// Overridable per request via `headers.immed`.
    pub immediate_response: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                  |
    /// |-------------------------|--------------------------|
    /// | `HOST`                  | `0.0.0.0`                |
    /// | `PORT`                  | `8080`                   |
    /// | `SRC_ADDR`              | `http://<host>:<port>`   |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `300`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                     |
    /// | `MAX_REQUEST_BYTES`     | `33554432`               |
    /// | `IMMEDIATE_RESPONSE`    | `false`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let src_addr =
            std::env::var("SRC_ADDR").unwrap_or_else(|_| format!("http://{host}:{port}"));

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let max_request_bytes: usize = std::env::var("MAX_REQUEST_BYTES")
            .unwrap_or_else(|_| "33554432".into())
            .parse()
            .expect("MAX_REQUEST_BYTES must be a valid usize");

        let immediate_response: bool = std::env::var("IMMEDIATE_RESPONSE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("IMMEDIATE_RESPONSE must be `true` or `false`");

        Self {
            host,
            port,
            src_addr,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            max_request_bytes,
            immediate_response,
        }
    }
}
