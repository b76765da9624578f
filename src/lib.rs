pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod progress_bar;
pub mod session;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
