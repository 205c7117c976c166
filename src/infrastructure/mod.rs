//! Browser-facing adapters: HTTP, canvas rendering and console logging.

pub mod http;
pub mod rendering;
pub mod services;
