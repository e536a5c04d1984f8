//! The target-retailer catalog: which sellers are kept and what they are
//! called.
//!
//! `targets` is a hard allow-list applied to raw search results — an offer
//! whose seller matches no entry is dropped outright. `canonical` is an
//! ordered variant → display-name table applied after cleanup; first match
//! wins, and unmatched sellers pass through cleaned rather than dropped.
//! A built-in Canadian grocery/pharmacy set ships as the default; deployments
//! can override it with a YAML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::normalize::clean_seller;

/// One row of the canonicalization table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalRule {
    /// Lowercase substring to look for in the cleaned seller text.
    pub contains: String,
    /// Canonical retailer display name.
    pub display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailerCatalog {
    /// Lowercase substrings identifying sellers worth keeping.
    pub targets: Vec<String>,
    /// Ordered canonicalization rules; earlier rows win.
    pub canonical: Vec<CanonicalRule>,
}

impl Default for RetailerCatalog {
    fn default() -> Self {
        let targets = [
            "walmart",
            "safeway",
            "save on foods",
            "costco",
            "superstore",
            "shoppers drug mart",
            "pharmasave",
            "pharmacy",
            "sobeys",
            "no frills",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect();

        // "shoppers drug mart" must precede the bare "shoppers" row, and
        // "walmart" covers the cleaned forms of "walmart.ca"/"walmartca".
        let canonical = [
            ("walmart", "Walmart"),
            ("shoppers drug mart", "Shoppers Drug Mart"),
            ("shoppers", "Shoppers Drug Mart"),
            ("sobeys", "Sobeys"),
            ("save on foods", "Save On Foods"),
            ("superstore", "Superstore"),
            ("costco", "Costco"),
            ("no frills", "No Frills"),
            ("safeway", "Safeway"),
            ("pharmasave", "Pharmasave"),
            ("pharmacy", "Pharmacy"),
        ]
        .into_iter()
        .map(|(contains, display)| CanonicalRule {
            contains: contains.to_owned(),
            display: display.to_owned(),
        })
        .collect();

        Self { targets, canonical }
    }
}

impl RetailerCatalog {
    /// Whether a raw seller string belongs to a target retailer
    /// (case-insensitive substring over the allow-list).
    #[must_use]
    pub fn is_target(&self, seller: &str) -> bool {
        let lower = seller.to_lowercase();
        self.targets.iter().any(|t| lower.contains(t.as_str()))
    }

    /// Maps a raw seller string to its canonical display name.
    ///
    /// The seller is cleaned first (see [`clean_seller`]); the first table
    /// row whose substring appears in the cleaned text wins. Unmatched
    /// sellers fall through to their cleaned form — filtering happens only
    /// via [`RetailerCatalog::is_target`], never here.
    #[must_use]
    pub fn canonical_name(&self, seller: &str) -> String {
        let cleaned = clean_seller(seller);
        self.canonical
            .iter()
            .find(|rule| cleaned.contains(rule.contains.as_str()))
            .map_or(cleaned, |rule| rule.display.clone())
    }
}

/// Wire shape of the retailers YAML file.
#[derive(Debug, Deserialize)]
struct RetailersFile {
    retailers: RetailerCatalog,
}

/// Load and validate a retailer catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_retailers(path: &Path) -> Result<RetailerCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RetailersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: RetailersFile = serde_yaml::from_str(&content)?;
    validate_retailers(&file.retailers)?;

    Ok(file.retailers)
}

fn validate_retailers(catalog: &RetailerCatalog) -> Result<(), ConfigError> {
    if catalog.targets.is_empty() {
        return Err(ConfigError::InvalidRetailers(
            "targets list is empty".to_owned(),
        ));
    }

    for target in &catalog.targets {
        if target.trim().is_empty() {
            return Err(ConfigError::InvalidRetailers(
                "targets contains a blank entry".to_owned(),
            ));
        }
        if target.chars().any(char::is_uppercase) {
            return Err(ConfigError::InvalidRetailers(format!(
                "target \"{target}\" must be lowercase"
            )));
        }
    }

    for rule in &catalog.canonical {
        if rule.contains.trim().is_empty() || rule.display.trim().is_empty() {
            return Err(ConfigError::InvalidRetailers(
                "canonical rule with blank pattern or display name".to_owned(),
            ));
        }
        if rule.contains.chars().any(char::is_uppercase) {
            return Err(ConfigError::InvalidRetailers(format!(
                "canonical pattern \"{}\" must be lowercase",
                rule.contains
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "retailers_test.rs"]
mod tests;
