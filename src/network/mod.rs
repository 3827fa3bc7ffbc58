pub mod client;
pub mod error;
pub mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use client::BackendClient;
pub use error::{ApiError, ApiResult};
pub use worker::ApiWorker;
