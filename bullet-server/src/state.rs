use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use bullet_core::CalendarOptions;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    api_key: Arc<str>,
    pub options: CalendarOptions,
    pub output_dir: PathBuf,
    /// Held for the duration of an update so two requests never write the
    /// calendar file at the same time. Downloads do not take it.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(AppState {
            api_key: Arc::from(config.api_key.as_str()),
            options: config.calendar_options()?,
            output_dir: config.output_dir.clone(),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn calendar_path(&self) -> PathBuf {
        self.options.output_path(&self.output_dir)
    }

    /// Compare a presented key without short-circuiting on the first mismatch.
    pub fn api_key_matches(&self, presented: &str) -> bool {
        let expected = self.api_key.as_bytes();
        let presented = presented.as_bytes();

        expected.len() == presented.len()
            && expected
                .iter()
                .zip(presented)
                .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                == 0
    }
}
