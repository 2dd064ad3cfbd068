pub mod app;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod validation;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{initialize_store, Seed};
pub use store::ExerciseStore;
