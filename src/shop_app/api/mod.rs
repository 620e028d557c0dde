// shop_app/api/mod.rs - Product feed access
//
// The catalog only sees the ProductSource trait. The HTTP client is
// compiled with the `feed` feature.

pub mod feed;

#[cfg(feature = "feed")]
pub mod http;

pub use feed::{parse_feed, FileProductSource, JsonProductSource, ProductSource};

#[cfg(feature = "feed")]
pub use http::HttpProductSource;
