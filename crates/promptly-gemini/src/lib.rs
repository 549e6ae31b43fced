mod adapter;
mod model_map;
mod provider_impl_generate;

pub use adapter::{API_KEY_ENV, BASE_URL_ENV, GeminiAdapter, GeminiAdapterBuilder};
pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GeminiClient};
pub use model_map::*;
pub mod api_v1;
mod client;
pub mod error;
