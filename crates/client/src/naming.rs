//! Identifier normalization for the remote naming convention.
//!
//! The admin console names actions and parameters in leading-lower
//! camelCase (`getStreamList`, `maxBandwidth`) while Rust call sites use
//! snake_case. `camelize` bridges the two and is applied to both the
//! action identifier and every parameter key before a request is built.

/// Convert a lower-case, word-separated identifier to leading-lower
/// camelCase.
///
/// Each `_`-separated word after the first is capitalized; letters and
/// digits keep their relative order. Identifiers that are already
/// camelCase pass through unchanged, and separator runs collapse without
/// leaving stray characters.
pub fn camelize(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut upper_next = false;
    for ch in ident.chars() {
        if ch == '_' {
            // A leading separator marks no word boundary.
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
