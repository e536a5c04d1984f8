//! Wire types for the vision and catalog APIs.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Vision (generateContent) response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentPart {
    #[serde(default)]
    pub text: String,
}

// ---------------------------------------------------------------------------
// Barcode catalog response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
}

/// Brand/title metadata for one catalogued product.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CatalogProduct {
    #[serde(default)]
    pub brand: Option<String>,
    pub title: String,
}

impl CatalogProduct {
    /// Builds the shopping-search query string: `"{brand} {title}"`, brand
    /// omitted when the catalog has none.
    #[must_use]
    pub fn search_query(&self) -> String {
        match self.brand.as_deref().filter(|b| !b.trim().is_empty()) {
            Some(brand) => format!("{brand} {}", self.title),
            None => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_joins_brand_and_title() {
        let product = CatalogProduct {
            brand: Some("Acme".to_owned()),
            title: "Widget".to_owned(),
        };
        assert_eq!(product.search_query(), "Acme Widget");
    }

    #[test]
    fn search_query_without_brand_is_title_only() {
        let product = CatalogProduct {
            brand: None,
            title: "Widget".to_owned(),
        };
        assert_eq!(product.search_query(), "Widget");
    }

    #[test]
    fn search_query_blank_brand_is_title_only() {
        let product = CatalogProduct {
            brand: Some("  ".to_owned()),
            title: "Widget".to_owned(),
        };
        assert_eq!(product.search_query(), "Widget");
    }
}
