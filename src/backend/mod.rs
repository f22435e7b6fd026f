//! Backend communication module

mod client;
mod error;
mod traits;

pub use client::BackendClient;
pub use error::UpdateError;
pub use traits::BackendApi;

#[cfg(test)]
pub use traits::MockBackendApi;
