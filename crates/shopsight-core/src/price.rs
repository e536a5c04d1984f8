//! Price-string parsing and offer ordering.
//!
//! Shopping vendors format prices inconsistently ("$12.99", "C$4.99 /ea.",
//! "1,299.99"). These helpers use manual character scanning rather than
//! `regex` to stay dependency-light; the parse is deliberately lenient so a
//! badly formatted price demotes an offer instead of dropping it.

use crate::types::Offer;

/// Extracts a numeric value from a vendor-formatted price string.
///
/// Keeps digits and decimal points, then parses the leading numeric run
/// (at most one decimal point). Returns `f64::INFINITY` when no number can
/// be extracted so unpriced offers sort after every priced one.
#[must_use]
pub fn parse_price(display: &str) -> f64 {
    let mut run = String::new();
    let mut seen_dot = false;

    for c in display.chars() {
        match c {
            '0'..='9' => run.push(c),
            // A second decimal point ends the numeric run ("4.99 /ea." has
            // already been stripped to "4.99." by this point).
            '.' if seen_dot => break,
            '.' => {
                seen_dot = true;
                run.push(c);
            }
            // Thousands separators and currency symbols are skipped, not
            // terminators: "1,299.99" parses as 1299.99.
            _ => {}
        }
    }

    run.parse::<f64>().unwrap_or(f64::INFINITY)
}

/// Stable ascending sort by parsed price; ties keep vendor order.
pub fn sort_by_price(offers: &mut [Offer]) {
    offers.sort_by(|a, b| a.price_value.total_cmp(&b.price_value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Distance;

    fn offer(price: &str) -> Offer {
        Offer {
            title: "Widget".to_owned(),
            price: price.to_owned(),
            price_value: parse_price(price),
            seller: "Walmart".to_owned(),
            canonical_seller: "Walmart".to_owned(),
            rating: None,
            review_count: None,
            thumbnail_url: None,
            product_link: None,
            distance: Distance::Unavailable,
        }
    }

    #[test]
    fn parse_price_plain_dollar_amount() {
        assert_eq!(parse_price("$12.99"), 12.99);
    }

    #[test]
    fn parse_price_strips_thousands_separator() {
        assert_eq!(parse_price("$1,299.99"), 1299.99);
    }

    #[test]
    fn parse_price_currency_prefix_and_unit_suffix() {
        assert_eq!(parse_price("C$4.99 /ea."), 4.99);
    }

    #[test]
    fn parse_price_integer_only() {
        assert_eq!(parse_price("15 CAD"), 15.0);
    }

    #[test]
    fn parse_price_leading_decimal_point() {
        assert_eq!(parse_price(".99"), 0.99);
    }

    #[test]
    fn parse_price_no_digits_is_infinity() {
        assert_eq!(parse_price("call for price"), f64::INFINITY);
    }

    #[test]
    fn parse_price_empty_is_infinity() {
        assert_eq!(parse_price(""), f64::INFINITY);
    }

    #[test]
    fn parse_price_with_digits_is_finite_and_non_negative() {
        for s in ["$0.00", "9", "about $3.50", "2 for 5.00"] {
            let v = parse_price(s);
            assert!(v.is_finite() && v >= 0.0, "{s} parsed to {v}");
        }
    }

    #[test]
    fn sort_by_price_ascending() {
        let mut offers = vec![offer("$5.49"), offer("$2.99"), offer("$10.00")];
        sort_by_price(&mut offers);
        let prices: Vec<&str> = offers.iter().map(|o| o.price.as_str()).collect();
        assert_eq!(prices, ["$2.99", "$5.49", "$10.00"]);
    }

    #[test]
    fn sort_by_price_unparseable_sorts_last() {
        let mut offers = vec![offer("see site"), offer("$2.99")];
        sort_by_price(&mut offers);
        assert_eq!(offers[0].price, "$2.99");
        assert_eq!(offers[1].price, "see site");
    }

    #[test]
    fn sort_by_price_is_idempotent() {
        let mut offers = vec![offer("$2.99"), offer("$5.49"), offer("$5.49")];
        sort_by_price(&mut offers);
        let once = offers.clone();
        sort_by_price(&mut offers);
        assert_eq!(offers, once);
    }

    #[test]
    fn sort_by_price_ties_keep_vendor_order() {
        let mut a = offer("$3.00");
        a.seller = "first".to_owned();
        let mut b = offer("$3.00");
        b.seller = "second".to_owned();
        let mut offers = vec![a, b];
        sort_by_price(&mut offers);
        assert_eq!(offers[0].seller, "first");
        assert_eq!(offers[1].seller, "second");
    }
}
