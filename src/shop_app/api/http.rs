// shop_app/api/http.rs - HTTP product feed
//
// Plain GET with no parameters; the body is the JSON feed.

use reqwest::Client;

use crate::shop_app::api::feed::{parse_feed, ProductSource};
use crate::shop_app::config::AppConfig;
use crate::shop_app::error::ProductFetchError;
use crate::shop_app::model::Product;

#[derive(Clone, Debug)]
pub struct HttpProductSource {
    client: Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ProductFetchError> {
        let client = Client::builder().timeout(config.feed_timeout).build()?;
        Ok(Self::new(client, config.feed_url.clone()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProductSource for HttpProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, ProductFetchError> {
        tracing::info!("Fetching products from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Product feed answered {}", status);
            return Err(ProductFetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        parse_feed(&bytes)
    }
}
