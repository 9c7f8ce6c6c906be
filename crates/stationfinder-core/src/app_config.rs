use std::net::SocketAddr;
use std::path::PathBuf;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// `None` means the built-in city/area table is used.
    pub areas_path: Option<PathBuf>,
    pub geocoder_url: String,
    pub overpass_url: String,
    pub user_agent: String,
    pub geocoder_timeout_secs: u64,
    pub overpass_timeout_secs: u64,
}
