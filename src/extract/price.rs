/// Parses a raw currency-formatted price fragment into a numeric value.
///
/// Strips one occurrence of the `S$` prefix and every thousands separator,
/// then parses the remainder as a decimal. Any parse failure degrades to
/// `0.0`, which is indistinguishable from a genuinely free listing.
pub fn parse_price(raw: &str) -> f64 {
    let cleaned = raw.replacen("S$", "", 1).replace(',', "");
    cleaned.parse().unwrap_or(0.0)
}
