// shop_app/pages/storefront.rs - Order and cart screen actions
//
// The order ("pedido") and cart ("carrito") screens share one CatalogCart.
// Storefront owns it together with the session and the notifier, and adds
// the user-facing side of each action: notices, removal confirmation and
// error recovery.

use crate::shop_app::api::ProductSource;
use crate::shop_app::catalog::CatalogCart;
use crate::shop_app::error::EmptyCartError;
use crate::shop_app::model::{Notice, ProductId, Receipt};
use crate::shop_app::notify::Notifier;
use crate::shop_app::session::SessionContext;

pub struct Storefront<N: Notifier> {
    catalog: CatalogCart,
    session: SessionContext,
    notifier: N,
}

impl<N: Notifier> Storefront<N> {
    pub fn new(session: SessionContext, notifier: N) -> Self {
        Self {
            catalog: CatalogCart::new(),
            session,
            notifier,
        }
    }

    pub fn catalog(&self) -> &CatalogCart {
        &self.catalog
    }

    /// Filters are set directly on the catalog
    pub fn catalog_mut(&mut self) -> &mut CatalogCart {
        &mut self.catalog
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Reload the catalog. Returns how many products are loaded afterwards.
    pub async fn refresh<S: ProductSource>(&mut self, source: &S) -> usize {
        let result = self
            .catalog
            .load_products(source)
            .await
            .map(|products| products.len());

        match result {
            Ok(count) => count,
            Err(e) => {
                self.notifier.notify(&Notice::FetchFailed {
                    reason: e.to_string(),
                });
                self.catalog.products().len()
            }
        }
    }

    /// Add one unit of a loaded product. `None` if no product has this id.
    pub fn add_product(&mut self, id: ProductId) -> Option<u32> {
        let product = self.catalog.product(id)?.clone();
        let quantity = self.catalog.add_to_cart(&product).quantity;

        self.notifier.notify(&Notice::ProductAdded { name: product.name });
        Some(quantity)
    }

    pub fn increase(&mut self, id: ProductId) -> Option<u32> {
        self.catalog.adjust_quantity(id, 1)
    }

    pub fn decrease(&mut self, id: ProductId) -> Option<u32> {
        self.catalog.adjust_quantity(id, -1)
    }

    /// Remove a cart line once the user confirms. Returns whether it was removed.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let name = match self.catalog.cart().iter().find(|line| line.product.id == id) {
            Some(line) => line.product.name.clone(),
            None => return false,
        };

        if !self.notifier.confirm(&Notice::ConfirmRemoval { name }) {
            return false;
        }

        self.catalog.remove_from_cart(id).is_some()
    }

    pub fn checkout(&mut self) -> Result<Receipt, EmptyCartError> {
        match self.catalog.checkout() {
            Ok(receipt) => {
                if let Some(user) = self.session.user() {
                    tracing::info!("Order {} placed by {}", receipt.id, user.client);
                }
                self.notifier.notify(&Notice::CheckoutSucceeded {
                    total: receipt.total,
                });
                Ok(receipt)
            }
            Err(e) => {
                self.notifier.notify(&Notice::EmptyCart);
                Err(e)
            }
        }
    }
}
