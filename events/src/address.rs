//! Account and object address helpers.
//!
//! Addresses arrive from the wallet, the indexer and config in different
//! spellings (`0x0ab`, `0xAB`, `ab`). Comparisons go through
//! [`normalize_address`] so those all name the same account.

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

/// Canonical comparison form: lowercase hex without `0x` or leading zeros.
#[must_use]
pub fn normalize_address(addr: &str) -> String {
    let trimmed = addr.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex.trim_start_matches('0').to_ascii_lowercase()
}

/// Whether two address spellings refer to the same account.
#[must_use]
pub fn same_address(a: &str, b: &str) -> bool {
    normalize_address(a) == normalize_address(b)
}

/// Whether `addr` is a `0x`-prefixed hex address of at most 32 bytes.
#[must_use]
pub fn is_hex_address(addr: &str) -> bool {
    let Some(hex) = addr.strip_prefix("0x") else {
        return false;
    };
    !hex.is_empty() && hex.len() <= 64 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Short display form, e.g. `0x5d7c…192e`.
///
/// Addresses already short enough are returned unchanged.
#[must_use]
pub fn abbreviate(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 12 {
        return addr.to_owned();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
