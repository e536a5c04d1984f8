//! Seller-string cleanup shared by filtering and canonicalization.
//!
//! Search vendors decorate retailer names with marketplace prefixes
//! ("DoorDash - Safeway"), storefront brands ("Voilà by Sobeys") and
//! country-domain suffixes ("walmart.ca"). Stripping those before matching
//! keeps the canonical mapping table small. See [`crate::retailers`] for the
//! table itself.

/// Lowercases a raw seller string and strips known marketplace decoration.
///
/// Steps, in order: trim, lowercase, drop reseller prefixes, drop the
/// `".ca"` domain suffix, remove remaining periods, collapse whitespace.
#[must_use]
pub fn clean_seller(raw: &str) -> String {
    let mut s = raw.trim().to_lowercase();

    for prefix in ["voilà by ", "voila by ", "doordash - "] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.to_owned();
        }
    }

    if let Some(rest) = s.strip_suffix(".ca") {
        s = rest.to_owned();
    }

    let s = s.replace('.', "");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
