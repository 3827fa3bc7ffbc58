pub mod app;
pub mod components;
pub mod router;
pub mod state;

pub use app::GhassanApp;
