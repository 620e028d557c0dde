// shop_app/model/mod.rs - Shared data models for the shop screens
//
// These structs mirror the product feed and session payloads. Field names
// are English on the Rust side and renamed to the Spanish keys the feed uses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ProductId = i64;
pub type CategoryId = i64;

/// Product from the feed (matches the `productos` payload)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "id_restaurante")]
    pub restaurant_id: i64,
    #[serde(rename = "id_categoria")]
    pub category_id: CategoryId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
    #[serde(rename = "disponible", default = "default_available")]
    pub available: bool,
    #[serde(rename = "destacado", default)]
    pub featured: bool,
}

fn default_available() -> bool {
    true
}

impl Product {
    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// One product in the cart with its quantity (always >= 1)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Catalog filters applied by the user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub category: Option<CategoryId>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.query.trim().is_empty()
    }

    /// Category equality first, then text. Blank query and no category pass everything.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category_id != category {
                return false;
            }
        }

        let needle = self.query.trim();
        needle.is_empty() || product.matches_text(&needle.to_lowercase())
    }
}

/// What a successful checkout reports back
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub total: Decimal,
    pub item_count: u64,
    pub lines: Vec<CartLine>,
    pub placed_at: DateTime<Utc>,
}

/// Stored session identity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "id_login")]
    pub login_id: i64,
    #[serde(rename = "id_perfil")]
    pub profile_id: i64,
    pub status: String,
    #[serde(rename = "fk_rol", default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
}

/// Screens the app can navigate to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Splash,
    Welcome,
    Login,
    Register,
    Home,
    Order,
    Cart,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Splash => "/",
            Route::Welcome => "/main",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Home => "/home",
            Route::Order => "/home/pedido",
            Route::Cart => "/home/carrito",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// User-visible notification or confirmation prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    ProductAdded { name: String },
    FetchFailed { reason: String },
    ConfirmRemoval { name: String },
    EmptyCart,
    CheckoutSucceeded { total: Decimal },
    FormInvalid { message: String },
    LoggedIn,
    Registered,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::ProductAdded { .. } => "Agregado",
            Notice::FetchFailed { .. } => "Error",
            Notice::ConfirmRemoval { .. } => "Eliminar producto",
            Notice::EmptyCart => "Carrito vacío",
            Notice::CheckoutSucceeded { .. } => "Compra exitosa",
            Notice::FormInvalid { .. } => "Error",
            Notice::LoggedIn | Notice::Registered => "Éxito",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::ProductAdded { name } => format!("{} se agregó al carrito", name),
            Notice::FetchFailed { reason } => {
                format!("No se pudieron cargar los productos: {}", reason)
            }
            Notice::ConfirmRemoval { .. } => {
                "¿Estás seguro de eliminar este producto?".to_string()
            }
            Notice::EmptyCart => "No hay productos en tu carrito".to_string(),
            Notice::CheckoutSucceeded { total } => format!("Total: {}", format_price(*total)),
            Notice::FormInvalid { message } => message.clone(),
            Notice::LoggedIn => "Has iniciado sesión correctamente.".to_string(),
            Notice::Registered => "Cuenta creada exitosamente.".to_string(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Price in soles with two decimals, e.g. `S/. 96.00`
pub fn format_price(amount: Decimal) -> String {
    format!("S/. {:.2}", amount.round_dp(2))
}
