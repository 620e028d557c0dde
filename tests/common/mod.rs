// common/mod.rs - Shared test utilities
//
// This module provides:
// 1. Product builders with explicit prices and categories
// 2. A notifier that records every notice instead of showing it
// 3. Product sources that fail on demand
// 4. Unique temporary paths for file-backed stores

#![allow(dead_code)]

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use fastfood_shop::shop_app::api::ProductSource;
use fastfood_shop::shop_app::error::ProductFetchError;
use fastfood_shop::shop_app::model::{CategoryId, Notice, Product, ProductId, User};
use fastfood_shop::shop_app::notify::Notifier;
use rust_decimal::Decimal;

/// Build a product with the given id, category and text price
pub fn product(id: ProductId, category_id: CategoryId, price: &str) -> Product {
    named_product(id, category_id, price, &format!("Producto {}", id), "")
}

pub fn named_product(
    id: ProductId,
    category_id: CategoryId,
    price: &str,
    name: &str,
    description: &str,
) -> Product {
    Product {
        id,
        restaurant_id: 1,
        category_id,
        name: name.to_string(),
        description: description.to_string(),
        price: dec(price),
        image: None,
        available: true,
        featured: false,
    }
}

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal literal")
}

/// Records notices and answers confirmations with a fixed choice
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    prompts: Mutex<Vec<Notice>>,
    answer: bool,
}

impl RecordingNotifier {
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
            answer,
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<Notice> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }

    fn confirm(&self, notice: &Notice) -> bool {
        self.prompts.lock().unwrap().push(notice.clone());
        self.answer
    }
}

/// Source that always answers with an HTTP error status
pub struct FailingSource {
    pub status: u16,
}

impl ProductSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<Product>, ProductFetchError> {
        Err(ProductFetchError::Status(self.status))
    }
}

/// Source serving a fixed product list
pub struct StaticSource {
    pub products: Vec<Product>,
}

impl ProductSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Product>, ProductFetchError> {
        Ok(self.products.clone())
    }
}

pub fn sample_user() -> User {
    User {
        client: "Ana Torres".to_string(),
        login_id: 42,
        profile_id: 3,
        status: "activo".to_string(),
        role_id: Some(2),
    }
}

/// A path under the system temp dir that no other test uses
pub fn unique_temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("fastfood_shop_{}", uuid::Uuid::new_v4()))
        .join(name)
}
