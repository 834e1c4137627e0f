use serde::{Deserialize, Serialize};

/// Unified error type for all NCP API operations.
///
/// Each variant carries structured context so callers can branch on the
/// failure kind instead of parsing message text. All variants are
/// serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum NcloudError {
    /// The supplied domain name has no registrable root under a known
    /// public suffix.
    InvalidDomainName {
        /// The domain name that failed to split.
        domain: String,
        /// Details about the failure.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken response stream, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request exceeded the client timeout.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API gateway answered with a non-200 status.
    ///
    /// The response body is drained and carried here for diagnostics; no
    /// retry is attempted.
    ApiRejected {
        /// HTTP status code.
        status: u16,
        /// Request method.
        method: String,
        /// Request path including the query string.
        path: String,
        /// Raw response body.
        body: String,
    },

    /// Failed to parse the body of an otherwise successful (200) response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The zone for the given domain name is not registered and creation
    /// was not requested.
    DomainNotFound {
        /// Domain name that was not found.
        domain: String,
    },

    /// The record targeted by a delete was not found.
    RecordNotFound {
        /// Domain name the record was searched under.
        domain: String,
        /// Record type filter used for the lookup.
        record_type: String,
        /// Record content filter used for the lookup.
        content: String,
    },

    /// A 200 response whose content does not contain the entity the call
    /// just created (e.g. a freshly imported certificate missing from the
    /// returned list).
    UnexpectedResponse {
        /// Details about the inconsistency.
        detail: String,
    },
}

impl NcloudError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidDomainName { .. }
                | Self::DomainNotFound { .. }
                | Self::RecordNotFound { .. }
        )
    }
}

impl std::fmt::Display for NcloudError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDomainName { domain, detail } => {
                write!(f, "Invalid domain name '{domain}': {detail}")
            }
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::ApiRejected {
                status,
                method,
                path,
                body,
            } => {
                write!(f, "API rejected {method} {path} (HTTP {status}): {body}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
            Self::DomainNotFound { domain } => {
                write!(f, "Domain '{domain}' is not registered")
            }
            Self::RecordNotFound {
                domain,
                record_type,
                content,
            } => {
                write!(
                    f,
                    "Record '{record_type} {content}' not found under '{domain}'"
                )
            }
            Self::UnexpectedResponse { detail } => {
                write!(f, "Unexpected response: {detail}")
            }
        }
    }
}

impl std::error::Error for NcloudError {}

/// Convenience type alias for `Result<T, NcloudError>`.
pub type Result<T> = std::result::Result<T, NcloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_domain_name() {
        let e = NcloudError::InvalidDomainName {
            domain: "not-a-domain".to_string(),
            detail: "no registrable root".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid domain name 'not-a-domain': no registrable root"
        );
    }

    #[test]
    fn display_network_error() {
        let e = NcloudError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = NcloudError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_api_rejected() {
        let e = NcloudError::ApiRejected {
            status: 401,
            method: "GET".to_string(),
            path: "/dns/v1/ncpdns/domain".to_string(),
            body: "{\"result\":\"FAIL\"}".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "API rejected GET /dns/v1/ncpdns/domain (HTTP 401): {\"result\":\"FAIL\"}"
        );
    }

    #[test]
    fn display_domain_not_found() {
        let e = NcloudError::DomainNotFound {
            domain: "example.com".to_string(),
        };
        assert_eq!(e.to_string(), "Domain 'example.com' is not registered");
    }

    #[test]
    fn display_record_not_found() {
        let e = NcloudError::RecordNotFound {
            domain: "www.example.com".to_string(),
            record_type: "A".to_string(),
            content: "203.0.113.9".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Record 'A 203.0.113.9' not found under 'www.example.com'"
        );
    }

    #[test]
    fn display_unexpected_response() {
        let e = NcloudError::UnexpectedResponse {
            detail: "certificate 'c-example' missing from import response".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Unexpected response: certificate 'c-example' missing from import response"
        );
    }

    #[test]
    fn serialize_json_tagged_by_code() {
        let e = NcloudError::ApiRejected {
            status: 503,
            method: "PUT".to_string(),
            path: "/dns/v1/ncpdns/record/apply/42".to_string(),
            body: "unavailable".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"ApiRejected\""));
        assert!(json.contains("\"status\":503"));
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<NcloudError> = vec![
            NcloudError::InvalidDomainName {
                domain: "x".into(),
                detail: "d".into(),
            },
            NcloudError::NetworkError { detail: "d".into() },
            NcloudError::Timeout { detail: "d".into() },
            NcloudError::ApiRejected {
                status: 400,
                method: "GET".into(),
                path: "/p".into(),
                body: "b".into(),
            },
            NcloudError::ParseError { detail: "d".into() },
            NcloudError::SerializationError { detail: "d".into() },
            NcloudError::DomainNotFound {
                domain: "x.com".into(),
            },
            NcloudError::RecordNotFound {
                domain: "x.com".into(),
                record_type: "A".into(),
                content: "1.2.3.4".into(),
            },
            NcloudError::UnexpectedResponse { detail: "d".into() },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: NcloudError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }

    #[test]
    fn expected_errors_classified() {
        assert!(
            NcloudError::DomainNotFound {
                domain: "x.com".into()
            }
            .is_expected()
        );
        assert!(
            NcloudError::RecordNotFound {
                domain: "x.com".into(),
                record_type: "A".into(),
                content: String::new(),
            }
            .is_expected()
        );
        assert!(
            NcloudError::InvalidDomainName {
                domain: "x".into(),
                detail: "d".into()
            }
            .is_expected()
        );
        assert!(!NcloudError::NetworkError { detail: "d".into() }.is_expected());
        assert!(
            !NcloudError::ApiRejected {
                status: 500,
                method: "GET".into(),
                path: "/p".into(),
                body: String::new(),
            }
            .is_expected()
        );
    }
}
