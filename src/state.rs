use crate::config::Config;
use crate::models::Phase;
use crate::progress_bar::ProgressBar;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub phase: Arc<Mutex<Phase>>,
    pub bar: Arc<ProgressBar>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            phase: Arc::new(Mutex::new(Phase::Idle)),
            bar: Arc::new(ProgressBar::new()),
        }
    }
}
