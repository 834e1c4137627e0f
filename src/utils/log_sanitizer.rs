//! Log sanitization utilities
//!
//! Response bodies can carry key material (certificate chains, signed
//! record content), so debug logs only ever see a bounded prefix.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Strings within the limit pass through unchanged; longer ones are cut at
/// the nearest character boundary below the limit with a suffix noting the
/// total size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = (0..=TRUNCATE_LIMIT)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
