// Catalog browser
//
// This binary:
// - Restores the stored session (SESSION_FILE)
// - Loads the product feed (PRODUCT_FEED_FILE or PRODUCT_FEED_URL)
// - Prints the catalog filtered by the command line
//
// Usage: fastfood [query] [category_id]

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use fastfood_shop::shop_app::api::{FileProductSource, HttpProductSource};
use fastfood_shop::shop_app::config::AppConfig;
use fastfood_shop::shop_app::model::{format_price, CategoryId};
use fastfood_shop::shop_app::notify::LogNotifier;
use fastfood_shop::shop_app::pages::{check_session, Storefront};
use fastfood_shop::shop_app::session::{FileSessionStore, SessionContext};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_default();
    let category: Option<CategoryId> = args
        .next()
        .map(|raw| raw.parse::<CategoryId>())
        .transpose()
        .context("category_id must be a number")?;

    let config = AppConfig::from_env();

    let store = FileSessionStore::new(&config.session_file);
    let mut session = SessionContext::new();
    let route = check_session(&store, &mut session);
    tracing::info!("Starting at {}", route);

    let mut storefront = Storefront::new(session, LogNotifier::default());
    let loaded = match &config.feed_file {
        Some(path) => storefront.refresh(&FileProductSource::new(path)).await,
        None => {
            let source = HttpProductSource::from_config(&config)?;
            storefront.refresh(&source).await
        }
    };

    if loaded == 0 {
        println!("No products available.");
        return Ok(());
    }

    let catalog = storefront.catalog_mut();
    catalog.set_query(query);
    catalog.set_category(category);

    let categories: Vec<String> = catalog.categories().iter().map(|c| c.to_string()).collect();
    println!("Categories: {}", categories.join(", "));

    let visible = catalog.visible_products();
    println!("Showing {} of {} products\n", visible.len(), loaded);

    for product in visible {
        let mut flags = Vec::new();
        if product.featured {
            flags.push("destacado");
        }
        if !product.available {
            flags.push("agotado");
        }

        println!(
            "  {:>4}  {:<32} {:>12}  {}",
            product.id,
            product.name,
            format_price(product.price),
            flags.join(" ")
        );
    }

    Ok(())
}
