//! Network boundary: wire DTOs and the proxy API client.

pub mod api;
pub mod types;
