// shop_app/pages/mod.rs - Screen-level logic
//
// - splash: startup session check and Welcome screen actions
// - auth: login and registration forms
// - storefront: order and cart screens over a shared CatalogCart

pub mod auth;
pub mod splash;
pub mod storefront;

pub use auth::{LoginForm, RegisterForm};
pub use splash::{check_session, WelcomeAction};
pub use storefront::Storefront;
