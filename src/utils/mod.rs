//! Utility modules.

/// Public-suffix domain splitting and host normalization.
pub mod domain_name;

/// Log sanitization utilities to keep key material out of debug logs.
pub mod log_sanitizer;
