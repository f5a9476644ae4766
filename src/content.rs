use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::state::{categories as derive_categories, Filter};

pub static PORTFOLIO: LazyLock<Vec<PortfolioItem>> =
    LazyLock::new(|| load_or_empty(PORTFOLIO_FILE, parse_portfolio));
pub static SERVICES: LazyLock<Vec<ServiceOffering>> =
    LazyLock::new(|| load_or_empty(SERVICES_FILE, parse_services));
pub static CATEGORIES: LazyLock<Vec<Filter>> = LazyLock::new(|| derive_categories(&PORTFOLIO));

const PORTFOLIO_FILE: &str = "portfolio.json";
const SERVICES_FILE: &str = "services.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

/// A finished project shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    /// Site-relative path of the cover image, resolved by the browser.
    pub image: String,
    pub description: String,
    pub client: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub price: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
    #[error("Portfolio ids must be positive, got {0}")]
    InvalidId(u32),
    #[error("Duplicate portfolio id {0}")]
    DuplicateId(u32),
    #[error("Empty {field} in entry {index}")]
    EmptyField { index: usize, field: &'static str },
}

impl From<serde_json::Error> for ContentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

/// Shipped portfolio table in display order.
pub fn portfolio() -> &'static [PortfolioItem] {
    &PORTFOLIO
}

pub fn services() -> &'static [ServiceOffering] {
    &SERVICES
}

/// Selectable gallery filters, derived once from [`portfolio`].
pub fn categories() -> &'static [Filter] {
    &CATEGORIES
}

pub fn parse_portfolio(raw: &str) -> Result<Vec<PortfolioItem>, ContentError> {
    let items = serde_json::from_str::<Vec<PortfolioItem>>(raw)?;
    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.id == 0 {
            return Err(ContentError::InvalidId(item.id));
        }
        if !seen.insert(item.id) {
            return Err(ContentError::DuplicateId(item.id));
        }
        if item.category.trim().is_empty() {
            return Err(ContentError::EmptyField {
                index,
                field: "category",
            });
        }
    }
    Ok(items)
}

pub fn parse_services(raw: &str) -> Result<Vec<ServiceOffering>, ContentError> {
    let services = serde_json::from_str::<Vec<ServiceOffering>>(raw)?;
    if let Some(index) = services.iter().position(|s| s.icon.trim().is_empty()) {
        return Err(ContentError::EmptyField {
            index,
            field: "icon",
        });
    }
    Ok(services)
}

fn read_asset(name: &str) -> Result<String, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    String::from_utf8(file.data.into()).map_err(|e| ContentError::Parse(e.to_string()))
}

fn load_or_empty<T>(name: &str, parse: fn(&str) -> Result<Vec<T>, ContentError>) -> Vec<T> {
    match read_asset(name).and_then(|raw| parse(&raw)) {
        Ok(items) => {
            log::debug!("loaded {} entries from {name}", items.len());
            items
        }
        Err(e) => {
            log::error!("{name}: {e}");
            Vec::new()
        }
    }
}
