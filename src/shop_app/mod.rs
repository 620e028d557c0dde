// shop_app/mod.rs - Root module for the food-ordering app logic
//
// Architecture:
// - model/: Product, cart, session and navigation types
// - api/: Product feed sources (in-memory, file, HTTP)
// - catalog: CatalogCart, the catalog filters and cart bookkeeping
// - session: Session context and stores
// - notify: Alert/confirmation collaborator
// - pages/: Screen-level glue (splash, login/register, order/cart)
// - config: Environment configuration
// - error: Error types

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod pages;
pub mod session;

pub use catalog::CatalogCart;
