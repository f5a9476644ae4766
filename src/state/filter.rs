use std::fmt;

use crate::content::PortfolioItem;

use super::PageError;

static ALL: &str = "All";

/// Gallery filter: the "All" sentinel or one category of the portfolio table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Accepts "All" or one of `categories`, matched exactly.
    pub fn parse(raw: &str, categories: &[Filter]) -> Result<Self, PageError> {
        if raw == ALL {
            return Ok(Filter::All);
        }
        categories
            .iter()
            .find(|f| f.as_str() == raw)
            .cloned()
            .ok_or_else(|| PageError::UnknownCategory(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Category(c) => c,
        }
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => item.category == *c,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "All" followed by each distinct category in first-occurrence order.
pub fn categories(items: &[PortfolioItem]) -> Vec<Filter> {
    let mut out = vec![Filter::All];
    for item in items {
        if !out.iter().any(|f| f.as_str() == item.category) {
            out.push(Filter::Category(item.category.clone()));
        }
    }
    out
}

pub fn filter_items<'a>(items: &'a [PortfolioItem], filter: &Filter) -> Vec<&'a PortfolioItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
