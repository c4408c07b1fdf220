//! Slug codec: destination name ↔ URL-fragment token.
//!
//! [`encode`] is the authoritative direction and defines the public
//! address scheme. [`decode`] is a near-inverse kept for display use; its
//! suffix and casing policy is asymmetric, so `decode(encode(name))` is
//! not guaranteed to round-trip. Catalog lookups must re-encode candidate
//! names and compare tokens (see `DestinationCatalog::resolve_token`),
//! never decode and compare strings.

/// Suffix words removed from names during encoding (lowercase, with the
/// leading space).
const STRIPPED_SUFFIXES: [&str; 2] = [" building", " office"];

/// Tokens whose decoded form takes the `Office` suffix.
const OFFICE_TOKENS: [&str; 2] = ["cashier", "registrar"];

/// Encode a destination name into a URL-safe token.
///
/// Lowercases the name, strips every occurrence of the suffix words
/// "building" and "office", and joins the remaining words with hyphens.
///
/// # Example
/// ```
/// use marga_guide::catalog::slug::encode;
///
/// assert_eq!(encode("ADMIN BUILDING"), "admin");
/// assert_eq!(encode("CLINIC OFFICE"), "clinic");
/// assert_eq!(encode("CCICT BUILDING"), "ccict");
/// ```
pub fn encode(name: &str) -> String {
    let mut token = name.to_lowercase();
    for suffix in STRIPPED_SUFFIXES {
        token = token.replace(suffix, "");
    }
    token.replace(' ', "-")
}

/// Decode a token back into a display name.
///
/// Splits on hyphens and capitalizes each part, then appends a suffix:
/// "Office" for the fixed set of office tokens, "BUILDING" otherwise.
/// The token `centennial` is special-cased to a fully upper-cased name.
pub fn decode(token: &str) -> String {
    if token == "centennial" {
        return "CENTENNIAL BUILDING".to_string();
    }

    let capitalized = token
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if OFFICE_TOKENS.iter().any(|office| token.contains(office)) {
        format!("{} Office", capitalized)
    } else {
        format!("{} BUILDING", capitalized)
    }
}

/// Uppercase the first character of a token part.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_strips_building_suffix() {
        assert_eq!(encode("ADMIN BUILDING"), "admin");
        assert_eq!(encode("SCIENCE BUILDING"), "science");
    }

    #[test]
    fn test_encode_strips_office_suffix() {
        assert_eq!(encode("CLINIC OFFICE"), "clinic");
    }

    #[test]
    fn test_encode_hyphenates_remaining_spaces() {
        assert_eq!(encode("CASHIER WINDOW OFFICE"), "cashier-window");
    }

    #[test]
    fn test_decode_special_case() {
        assert_eq!(decode("centennial"), "CENTENNIAL BUILDING");
    }

    #[test]
    fn test_decode_office_tokens() {
        assert_eq!(decode("cashier"), "Cashier Office");
        assert_eq!(decode("registrar"), "Registrar Office");
    }

    #[test]
    fn test_decode_default_building_suffix() {
        assert_eq!(decode("science"), "Science BUILDING");
        assert_eq!(decode("not-a-real-place"), "Not A Real Place BUILDING");
    }

    #[test]
    fn test_decode_is_not_inverse_of_encode() {
        // Casing and suffix policy are asymmetric; matching must re-encode.
        let name = "CLINIC OFFICE";
        assert_ne!(decode(&encode(name)), name);
        // But re-encoding the decoded form yields the same token.
        assert_eq!(encode(&decode(&encode(name))), encode(name));
    }

    #[test]
    fn test_capitalize_empty_part() {
        assert_eq!(capitalize(""), "");
    }
}
