//! NCP API 类型定义
//!
//! Global DNS 与 Certificate Manager 的请求/响应结构。
//! 响应中未列出的字段一律忽略。

use serde::{Deserialize, Serialize};

// ============ Global DNS ============

/// Spring-style page envelope returned by the Global DNS list endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

/// A registered Global DNS zone.
///
/// Callers identify a zone by its registrable root domain name; the
/// provider's true identity for it is the numeric `id` allocated at
/// registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub complete_yn: bool,
    #[serde(default)]
    pub dnssec_yn: bool,
}

/// A DNS record inside a zone.
///
/// `host` of `"@"` denotes the zone apex. `apply_yn` reports whether the
/// record has been committed to the live zone; mutations stay staged until
/// the zone's pending changes are applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    pub id: i64,
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub del_yn: bool,
    #[serde(default)]
    pub apply_yn: bool,
}

/// Zone registration request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DomainCreateRequest {
    pub name: String,
    pub comments: String,
}

/// Record creation request body (sent as a one-element array).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordCreateRequest {
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
}

/// Record update request body (sent as a one-element array).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordUpdateRequest {
    pub id: i64,
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
}

// ============ Certificate Manager ============

/// A certificate registered with Certificate Manager.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub certificate_no: i64,
    pub certificate_name: String,
    #[serde(default)]
    pub certificate_type: Option<String>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub valid_start_date: Option<String>,
    #[serde(default)]
    pub valid_end_date: Option<String>,
    #[serde(default)]
    pub cert_serial_number: Option<String>,
    #[serde(default)]
    pub cert_public_key_info: Option<String>,
    #[serde(default)]
    pub external_yn: Option<String>,
}

/// Certificate Manager list/import response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CertificateListResponse {
    pub return_code: String,
    #[serde(default)]
    pub return_message: Option<String>,
    #[serde(default)]
    pub ssl_certificate_list: Vec<Certificate>,
}

/// External certificate import request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CertificateImportRequest {
    pub certificate_name: String,
    pub private_key: String,
    pub public_key_certificate: String,
    pub certificate_chain: String,
}
