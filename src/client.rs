//! NCP API 网关 HTTP 客户端
//!
//! 每次请求均即时生成时间戳与签名（绝不复用），响应体在所有路径上
//! 读取完毕后才交给调用方解码。

use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{NcloudError, Result};
use crate::sign::signature;
use crate::utils::log_sanitizer::truncate_for_log;

/// Global DNS service endpoint.
pub(crate) const GLOBALDNS_ENDPOINT: &str = "https://globaldns.apigw.ntruss.com";
/// Certificate Manager service endpoint.
pub(crate) const CERT_MANAGER_ENDPOINT: &str = "https://certificatemanager.apigw.ntruss.com";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Signed-request client for the NCP API gateway.
///
/// Holds the credential pair and a pooled HTTP client with fixed connect
/// and request timeouts. All operations are sequential request/response
/// with no retry; a transient failure surfaces to the caller, who decides
/// whether to re-run the whole operation.
///
/// # Construction
///
/// ```rust,no_run
/// use ncloud_provider::NcloudClient;
///
/// let client = NcloudClient::new(
///     "your-access-key".to_string(),
///     "your-secret-key".to_string(),
/// );
/// ```
pub struct NcloudClient {
    pub(crate) http: Client,
    pub(crate) access_key: String,
    secret_key: String,
    pub(crate) dns_endpoint: String,
    pub(crate) cert_endpoint: String,
}

/// Builder for [`NcloudClient`] with configurable endpoints and timeout.
pub struct NcloudClientBuilder {
    access_key: String,
    secret_key: String,
    dns_endpoint: String,
    cert_endpoint: String,
    request_timeout: Duration,
}

impl NcloudClientBuilder {
    fn new(access_key: String, secret_key: String) -> Self {
        Self {
            access_key,
            secret_key,
            dns_endpoint: GLOBALDNS_ENDPOINT.to_string(),
            cert_endpoint: CERT_MANAGER_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the Global DNS endpoint (e.g. a local test server).
    pub fn dns_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.dns_endpoint = endpoint.into();
        self
    }

    /// Override the Certificate Manager endpoint (e.g. a local test server).
    pub fn cert_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.cert_endpoint = endpoint.into();
        self
    }

    /// Set the per-request timeout (default: 30 s).
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the [`NcloudClient`] instance.
    pub fn build(self) -> NcloudClient {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(self.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        NcloudClient {
            http,
            access_key: self.access_key,
            secret_key: self.secret_key,
            dns_endpoint: self.dns_endpoint,
            cert_endpoint: self.cert_endpoint,
        }
    }
}

impl NcloudClient {
    /// Creates a client with the default service endpoints.
    pub fn new(access_key: String, secret_key: String) -> Self {
        Self::builder(access_key, secret_key).build()
    }

    /// Returns a builder for customizing endpoints and timeout.
    pub fn builder(access_key: String, secret_key: String) -> NcloudClientBuilder {
        NcloudClientBuilder::new(access_key, secret_key)
    }

    /// 序列化请求体
    pub(crate) fn encode_body<B: Serialize>(body: &B) -> Result<String> {
        serde_json::to_string(body).map_err(|e| NcloudError::SerializationError {
            detail: e.to_string(),
        })
    }

    /// 解析 200 响应的 JSON 正文
    pub(crate) fn parse_json<T: DeserializeOwned>(response_text: &str) -> Result<T> {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            NcloudError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// 发送一次签名请求并返回响应正文。
    ///
    /// 时间戳与签名在发送前即时计算；`path_with_query` 必须与实际发送的
    /// 请求行完全一致，否则网关拒绝。非 200 状态读完正文后作为
    /// [`NcloudError::ApiRejected`] 返回。
    pub(crate) async fn request_text(
        &self,
        method: Method,
        endpoint: &str,
        path_with_query: &str,
        payload: Option<String>,
    ) -> Result<String> {
        let timestamp = Utc::now().timestamp_millis();
        let sig = signature(
            &self.access_key,
            &self.secret_key,
            method.as_str(),
            path_with_query,
            timestamp,
        );

        log::debug!("{method} {path_with_query}");

        let mut request = self
            .http
            .request(method.clone(), format!("{endpoint}{path_with_query}"))
            .header("x-ncp-apigw-timestamp", timestamp.to_string())
            .header("x-ncp-iam-access-key", &self.access_key)
            .header("x-ncp-apigw-signature-v2", sig)
            .header("Accept", "application/json");

        if let Some(body) = payload {
            log::debug!("Request Body: {}", truncate_for_log(&body));
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                NcloudError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                NcloudError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        if status != 200 {
            // 排空响应体并带入错误，便于诊断
            let body = response.text().await.unwrap_or_default();
            log::warn!("{method} {path_with_query} rejected (HTTP {status})");
            return Err(NcloudError::ApiRejected {
                status,
                method: method.to_string(),
                path: path_with_query.to_string(),
                body,
            });
        }

        let response_text = response.text().await.map_err(|e| NcloudError::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok(response_text)
    }

    /// 发送请求并将 200 响应解码为 `T`。
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        path_with_query: &str,
        payload: Option<String>,
    ) -> Result<T> {
        let text = self
            .request_text(method, endpoint, path_with_query, payload)
            .await?;
        Self::parse_json(&text)
    }
}
