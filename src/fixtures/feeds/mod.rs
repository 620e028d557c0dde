// fixtures/feeds/mod.rs
//
// Each feed is a unit struct implementing TestFeed.

pub mod menu;

pub use menu::{MenuFeed, TwoCategoryFeed};
