// shop_app/catalog.rs - Catalog and cart state
//
// CatalogCart owns the loaded product set, the active filters and the
// cart lines. Views and totals are derived on demand from the full set;
// nothing is cached or indexed.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::shop_app::api::ProductSource;
use crate::shop_app::error::{EmptyCartError, ProductFetchError};
use crate::shop_app::model::{CartLine, CategoryId, FilterState, Product, ProductId, Receipt};

/// Stamp handed out by [`CatalogCart::begin_load`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Result of finishing a load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The product set was replaced with `count` products
    Applied { count: usize },
    /// A newer load was already applied; this result was dropped
    Discarded,
}

#[derive(Clone, Debug, Default)]
pub struct CatalogCart {
    products: Vec<Product>,
    filter: FilterState,
    cart: Vec<CartLine>,
    issued: u64,
    applied: u64,
}

impl CatalogCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    // --- Loading ---

    /// Fetch from `source` and replace the product set.
    ///
    /// On failure the previous set is kept and the error is returned.
    pub async fn load_products<S: ProductSource>(
        &mut self,
        source: &S,
    ) -> Result<&[Product], ProductFetchError> {
        let ticket = self.begin_load();
        let result = source.fetch().await;
        self.finish_load(ticket, result)?;
        Ok(&self.products)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Apply the result of the load started with `ticket`.
    ///
    /// Results older than the last applied load are discarded whether
    /// they succeeded or not.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, ProductFetchError>,
    ) -> Result<LoadOutcome, ProductFetchError> {
        if ticket.0 <= self.applied {
            debug!("Dropping stale load #{} (applied #{})", ticket.0, self.applied);
            return Ok(LoadOutcome::Discarded);
        }

        match result {
            Ok(products) => {
                info!("Loaded {} products (load #{})", products.len(), ticket.0);
                self.products = products;
                self.applied = ticket.0;
                Ok(LoadOutcome::Applied {
                    count: self.products.len(),
                })
            }
            Err(e) => {
                warn!("Product load #{} failed, keeping {} products: {}", ticket.0, self.products.len(), e);
                Err(e)
            }
        }
    }

    // --- Filtering ---

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filter.query = text.into();
    }

    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.filter.category = category;
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Products passing the current filters, in feed order
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Distinct category ids of the full set, first-seen order
    pub fn categories(&self) -> Vec<CategoryId> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category_id) {
                seen.push(product.category_id);
            }
        }
        seen
    }

    // --- Cart ---

    pub fn add_to_cart(&mut self, product: &Product) -> &CartLine {
        let index = match self.line_index(product.id) {
            Some(index) => {
                self.cart[index].quantity = self.cart[index].quantity.saturating_add(1);
                index
            }
            None => {
                self.cart.push(CartLine::new(product.clone()));
                self.cart.len() - 1
            }
        };

        let line = &self.cart[index];
        debug!("Cart: {} x{}", line.product.name, line.quantity);
        line
    }

    /// Shift a line's quantity by `delta`, clamping at zero.
    ///
    /// Returns the new quantity, or `None` when the line is absent or was removed.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> Option<u32> {
        let index = self.line_index(id)?;
        let current = i64::from(self.cart[index].quantity);
        let next = current.saturating_add(delta).max(0);

        if next == 0 {
            let line = self.cart.remove(index);
            debug!("Cart: {} removed by quantity change", line.product.name);
            return None;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.cart[index].quantity = quantity;
        Some(quantity)
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.line_index(id)?;
        let line = self.cart.remove(index);
        debug!("Cart: {} removed", line.product.name);
        Some(line)
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line_index(id).map(|i| self.cart[i].quantity).unwrap_or(0)
    }

    pub fn line_count(&self) -> usize {
        self.cart.len()
    }

    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities, not distinct lines
    pub fn cart_item_count(&self) -> u64 {
        self.cart.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Report the total and empty the cart
    pub fn checkout(&mut self) -> Result<Receipt, EmptyCartError> {
        if self.cart.is_empty() {
            return Err(EmptyCartError);
        }

        let receipt = Receipt {
            id: Uuid::new_v4(),
            total: self.cart_total(),
            item_count: self.cart_item_count(),
            lines: std::mem::take(&mut self.cart),
            placed_at: Utc::now(),
        };

        info!("Checkout {}: {} items, total {}", receipt.id, receipt.item_count, receipt.total);
        Ok(receipt)
    }

    fn line_index(&self, id: ProductId) -> Option<usize> {
        self.cart.iter().position(|line| line.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product(id: ProductId, category_id: CategoryId, price: &str) -> Product {
        Product {
            id,
            restaurant_id: 1,
            category_id,
            name: format!("Producto {}", id),
            description: String::new(),
            price: Decimal::from_str(price).unwrap(),
            image: None,
            available: true,
            featured: false,
        }
    }

    #[test]
    fn test_new_is_empty() {
        let state = CatalogCart::new();
        assert!(state.products().is_empty());
        assert!(state.visible_products().is_empty());
        assert_eq!(state.cart_total(), Decimal::ZERO);
        assert_eq!(state.cart_item_count(), 0);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = CatalogCart::new();
        let first = state.begin_load();
        let second = state.begin_load();

        let outcome = state.finish_load(second, Ok(vec![product(2, 1, "2.00")])).unwrap();
        assert_eq!(outcome, LoadOutcome::Applied { count: 1 });

        let outcome = state
            .finish_load(first, Ok(vec![product(1, 1, "1.00"), product(3, 1, "3.00")]))
            .unwrap();
        assert_eq!(outcome, LoadOutcome::Discarded);
        assert_eq!(state.products().len(), 1);
        assert_eq!(state.products()[0].id, 2);
    }

    #[test]
    fn test_older_load_applies_if_newer_failed() {
        let mut state = CatalogCart::new();
        let first = state.begin_load();
        let second = state.begin_load();

        let failed = state.finish_load(
            second,
            Err(ProductFetchError::Status(503)),
        );
        assert!(failed.is_err());

        let outcome = state.finish_load(first, Ok(vec![product(1, 1, "1.00")])).unwrap();
        assert_eq!(outcome, LoadOutcome::Applied { count: 1 });
    }

    #[test]
    fn test_adjust_absent_is_noop() {
        let mut state = CatalogCart::new();
        assert_eq!(state.adjust_quantity(99, 1), None);
        assert_eq!(state.line_count(), 0);
    }

    #[test]
    fn test_adjust_large_negative_removes() {
        let mut state = CatalogCart::new();
        let p = product(1, 1, "5.00");
        state.add_to_cart(&p);
        state.add_to_cart(&p);

        assert_eq!(state.adjust_quantity(1, -10), None);
        assert_eq!(state.quantity_of(1), 0);
        assert_eq!(state.line_count(), 0);
    }

    #[test]
    fn test_checkout_takes_lines() {
        let mut state = CatalogCart::new();
        state.add_to_cart(&product(1, 1, "5.00"));

        let receipt = state.checkout().unwrap();
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.item_count, 1);
        assert!(state.cart().is_empty());
        assert_eq!(state.checkout(), Err(EmptyCartError));
    }
}
