// Adapters layer: concrete surfaces over the core service.

pub mod http;
