//! Certificate Manager 外部证书导入
//!
//! 只有创建路径；导入不可幂等，重复导入同名证书由服务端拒绝。

use reqwest::Method;

use crate::client::NcloudClient;
use crate::error::{NcloudError, Result};
use crate::types::{Certificate, CertificateImportRequest, CertificateListResponse};
use crate::utils::domain_name::{root_label, split_domain};

/// Derives the canonical certificate name for a domain.
///
/// The name is `c-` plus the root domain with its public suffix stripped,
/// plus the subdomain with dots replaced by hyphens:
///
/// - `"example.com"` → `"c-example"`
/// - `"api.example.com"` → `"c-example-api"`
/// - `"a.b.example.co.kr"` → `"c-example-a-b"`
pub fn certificate_name(domain_name: &str) -> Result<String> {
    let (root, subdomain) = split_domain(domain_name)?;
    let label = root_label(&root);

    if subdomain.is_empty() {
        Ok(format!("c-{label}"))
    } else {
        Ok(format!("c-{label}-{}", subdomain.replace('.', "-")))
    }
}

/// PEM 规范化：行尾统一为 `\n`，去掉首尾空白，保证恰好一个结尾换行。
fn normalize_pem(block: &str) -> String {
    let unified = block.replace("\r\n", "\n").replace('\r', "\n");
    format!("{}\n", unified.trim())
}

impl NcloudClient {
    /// Imports an externally issued certificate under the canonical name
    /// derived from `domain_name`.
    ///
    /// Every PEM block is normalized (line endings, surrounding
    /// whitespace) and the chain submitted to the provider is the
    /// intermediate chain followed by the root CA, separated by a single
    /// newline. The import response carries a certificate list; the entry
    /// whose name equals the derived name is returned. A 200 response
    /// without that entry is [`NcloudError::UnexpectedResponse`] — the
    /// provider claims success but the certificate cannot be identified.
    ///
    /// Create-only: there is no update or delete path for certificates.
    pub async fn import_external_certificate(
        &self,
        domain_name: &str,
        private_key: &str,
        cert_body: &str,
        cert_chain: &str,
        root_ca: &str,
    ) -> Result<Certificate> {
        let name = certificate_name(domain_name)?;
        let chain = format!("{}{}", normalize_pem(cert_chain), normalize_pem(root_ca));

        let body = Self::encode_body(&CertificateImportRequest {
            certificate_name: name.clone(),
            private_key: normalize_pem(private_key),
            public_key_certificate: normalize_pem(cert_body),
            certificate_chain: chain,
        })?;

        let response: CertificateListResponse = self
            .request_json(
                Method::POST,
                &self.cert_endpoint,
                "/api/v1/certificate/withExternal",
                Some(body),
            )
            .await?;

        Self::check_return_code(&response, "certificate import")?;

        response
            .ssl_certificate_list
            .into_iter()
            .find(|c| c.certificate_name == name)
            .ok_or_else(|| NcloudError::UnexpectedResponse {
                detail: format!("certificate '{name}' missing from import response"),
            })
    }

    /// Lists all certificates registered with Certificate Manager.
    pub async fn get_certificates(&self) -> Result<Vec<Certificate>> {
        let response: CertificateListResponse = self
            .request_json(Method::GET, &self.cert_endpoint, "/api/v1/certificates", None)
            .await?;

        Self::check_return_code(&response, "certificate listing")?;

        Ok(response.ssl_certificate_list)
    }

    /// 200 响应但业务返回码非 "0" 视为协议不一致
    fn check_return_code(response: &CertificateListResponse, operation: &str) -> Result<()> {
        if response.return_code == "0" {
            return Ok(());
        }
        Err(NcloudError::UnexpectedResponse {
            detail: format!(
                "{operation} returned code {} ({})",
                response.return_code,
                response.return_message.as_deref().unwrap_or("no message")
            ),
        })
    }
}
