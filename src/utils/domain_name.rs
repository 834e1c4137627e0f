//! 域名拆分（Public Suffix List）与主机名规范化

use crate::error::{NcloudError, Result};

/// Splits a fully-qualified domain name into its registrable root domain
/// and the subdomain labels in front of it.
///
/// The registrable root is the eTLD+1 per the Public Suffix List, so
/// compound suffixes are treated as one unit:
///
/// - `"www.example.com"` → `("example.com", "www")`
/// - `"example.com"` → `("example.com", "")`
/// - `"a.b.example.co.kr"` → `("example.co.kr", "a.b")`
///
/// Fails with [`NcloudError::InvalidDomainName`] when the name has no
/// registrable root under a known public suffix.
pub fn split_domain(domain_name: &str) -> Result<(String, String)> {
    let root = psl::domain_str(domain_name).ok_or_else(|| NcloudError::InvalidDomainName {
        domain: domain_name.to_string(),
        detail: "no registrable root under a known public suffix".to_string(),
    })?;

    let subdomain = domain_name
        .strip_suffix(root)
        .map(|prefix| prefix.trim_end_matches('.'))
        .unwrap_or_default();

    Ok((root.to_string(), subdomain.to_string()))
}

/// The first label of a registrable root domain, i.e. the root with its
/// public suffix stripped (`"example.co.kr"` → `"example"`).
pub(crate) fn root_label(root: &str) -> &str {
    root.split('.').next().unwrap_or(root)
}

/// Normalizes a host filter: the empty string denotes the zone apex and
/// becomes `"@"`, matching how the provider stores apex records.
pub fn normalize_host(host: &str) -> String {
    if host.is_empty() {
        "@".to_string()
    } else {
        host.to_string()
    }
}
