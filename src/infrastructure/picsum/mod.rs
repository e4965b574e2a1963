//! Lorem Picsum listing API client.

mod client;
mod dto;

pub use client::{DEFAULT_REQUEST_TIMEOUT, PICSUM_API_BASE, PicsumClient};
