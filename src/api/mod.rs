//! API client module

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod response;

pub use client::BgpViewClient;
pub use endpoints::Endpoint;
pub use error::{Error, Result};
