//! Service-layer modules: upstream forwarding for the proxy routes.

pub mod proxy;
