// lib.rs - Root module for the fastfood_shop library
//
// shop_app holds the catalog, cart, session and screen logic.
// fixtures holds sample product feeds shared by the tests.

/// Catalog, cart, session and screen logic
pub mod shop_app;

/// Reusable sample feeds
pub mod fixtures;
