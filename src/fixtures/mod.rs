// fixtures/mod.rs - Test fixtures module
//
// A fixture is a reusable sample feed. Instead of writing product JSON in
// every test, each feed is defined once here and loaded with:
//
//   let products = MenuFeed::products();
//   let source = MenuFeed::source();

pub mod feeds;

use crate::shop_app::api::{parse_feed, JsonProductSource};
use crate::shop_app::model::Product;

/// A sample product feed
pub trait TestFeed {
    /// The raw feed body, exactly as the product source would return it
    fn feed_json() -> &'static str;

    /// The feed decoded into products
    fn products() -> Vec<Product> {
        parse_feed(Self::feed_json().as_bytes()).unwrap_or_else(|e| {
            panic!("fixture feed is malformed: {}", e)
        })
    }

    /// An in-memory source serving this feed
    fn source() -> JsonProductSource {
        JsonProductSource::new(Self::feed_json())
    }
}
