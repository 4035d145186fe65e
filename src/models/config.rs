//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_WINDOW_SIZE;

fn default_pagination_window() -> usize {
    DEFAULT_WINDOW_SIZE
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Pages shown on each side of the current page in table pagination.
    #[serde(default = "default_pagination_window")]
    pub pagination_window: usize,
    /// Time zone preselected in the backup task form.
    #[serde(default = "default_time_zone")]
    pub default_time_zone: String,
}
