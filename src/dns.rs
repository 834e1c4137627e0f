//! Global DNS 域名与记录操作
//!
//! 记录的增删改在服务端先进入暂存区，必须对所属域名执行 apply 才会
//! 生效；各操作的提交责任见其文档。

use reqwest::Method;

use crate::client::NcloudClient;
use crate::error::{NcloudError, Result};
use crate::types::{
    DnsRecord, Domain, DomainCreateRequest, Page, RecordCreateRequest, RecordUpdateRequest,
};
use crate::utils::domain_name::{normalize_host, split_domain};

/// 域名查询页大小。接口按名称精确匹配，首页即足够。
const DOMAIN_PAGE_SIZE: u32 = 10;
/// 记录查询页大小，覆盖现实规模的 zone。
const RECORD_PAGE_SIZE: u32 = 1000;

/// 记录匹配策略：空过滤串匹配任意值，已删除的记录永不匹配。
fn record_matches(record: &DnsRecord, host: &str, record_type: &str, content: &str) -> bool {
    !record.del_yn
        && (host.is_empty() || record.host == host)
        && (record_type.is_empty() || record.record_type == record_type)
        && (content.is_empty() || record.content == content)
}

/// 在一页记录中找出第一条符合过滤条件的记录。
fn find_matching(
    records: Vec<DnsRecord>,
    host: &str,
    record_type: &str,
    content: &str,
) -> Option<DnsRecord> {
    records
        .into_iter()
        .find(|r| record_matches(r, host, record_type, content))
}

impl NcloudClient {
    // ==================== 域名 ====================

    /// Looks up the zone for a fully-qualified domain name, optionally
    /// registering it on first use.
    ///
    /// The name is split into its registrable root; the first page of the
    /// exact-match zone listing is scanned for it. When absent:
    /// `create_if_missing = false` returns `Ok(None)` (not an error), and
    /// `true` registers the zone and re-fetches it to obtain the allocated
    /// id. Zones are never deleted by this client.
    pub async fn ensure_domain(
        &self,
        domain_name: &str,
        create_if_missing: bool,
    ) -> Result<Option<Domain>> {
        let (root, _) = split_domain(domain_name)?;

        if let Some(domain) = self.lookup_domain(&root).await? {
            return Ok(Some(domain));
        }

        if !create_if_missing {
            return Ok(None);
        }

        log::info!("domain '{root}' not registered yet, creating");
        self.create_domain(&root).await?;

        // 创建返回 200 后重新查询以取得分配的 id
        match self.lookup_domain(&root).await? {
            Some(domain) => Ok(Some(domain)),
            None => Err(NcloudError::UnexpectedResponse {
                detail: format!("domain '{root}' missing from listing right after creation"),
            }),
        }
    }

    /// 按注册根域名精确查询第一页
    async fn lookup_domain(&self, root: &str) -> Result<Option<Domain>> {
        let path = format!(
            "/dns/v1/ncpdns/domain?page=0&size={DOMAIN_PAGE_SIZE}&domainName={}",
            urlencoding::encode(root)
        );
        let page: Page<Domain> = self
            .request_json(Method::GET, &self.dns_endpoint, &path, None)
            .await?;
        Ok(page.content.into_iter().find(|d| d.name == root))
    }

    /// 注册根域名
    async fn create_domain(&self, root: &str) -> Result<()> {
        let body = Self::encode_body(&DomainCreateRequest {
            name: root.to_string(),
            comments: String::new(),
        })?;
        self.request_text(Method::POST, &self.dns_endpoint, "/dns/v1/ncpdns/domain", Some(body))
            .await?;
        Ok(())
    }

    /// Commits the zone's staged record changes into the live zone.
    ///
    /// Safe to call repeatedly (a no-op when nothing is pending), so
    /// callers invoke it unconditionally after a mutation instead of
    /// tracking dirty state. Until applied, created/updated/deleted
    /// records are not served.
    pub async fn apply_domain(&self, domain: &Domain) -> Result<()> {
        let path = format!("/dns/v1/ncpdns/record/apply/{}", domain.id);
        self.request_text(Method::PUT, &self.dns_endpoint, &path, None)
            .await?;
        Ok(())
    }

    // ==================== 记录 ====================

    /// Scans one page of the zone's records of the given type for the
    /// first live record matching the filters.
    ///
    /// An empty `record_type` or `content` filter matches any value for
    /// that field; an empty `host` denotes the apex and is normalized to
    /// `"@"` before matching. Records flagged deleted never match.
    /// Absence is `Ok(None)`, not an error.
    pub async fn find_record(
        &self,
        domain: &Domain,
        host: &str,
        record_type: &str,
        content: &str,
    ) -> Result<Option<DnsRecord>> {
        let host = normalize_host(host);
        let path = format!(
            "/dns/v1/ncpdns/record/{}?page=0&size={RECORD_PAGE_SIZE}&recordType={}",
            domain.id,
            urlencoding::encode(record_type)
        );
        let page: Page<DnsRecord> = self
            .request_json(Method::GET, &self.dns_endpoint, &path, None)
            .await?;
        Ok(find_matching(page.content, &host, record_type, content))
    }

    /// Ensures the zone contains a record with the desired host, type,
    /// content and TTL, creating the zone first when allowed.
    ///
    /// An existing record is reused only when its content already matches
    /// the desired content; a match is refreshed in place by id (the TTL
    /// is re-submitted), otherwise a new record is created and taken out
    /// of the creation response.
    ///
    /// The change stays staged server-side: after a successful call the
    /// caller must invoke [`apply_domain`](Self::apply_domain) on the
    /// returned [`Domain`] for it to take effect. The step sequence is not
    /// atomic — a failure mid-way can leave the zone registered without
    /// the record — and blind re-runs are safe because every step
    /// re-checks remote state first.
    pub async fn set_record(
        &self,
        domain_name: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
        create_domain_if_missing: bool,
    ) -> Result<(Domain, DnsRecord)> {
        let (_, subdomain) = split_domain(domain_name)?;
        let host = normalize_host(&subdomain);

        let domain = self
            .ensure_domain(domain_name, create_domain_if_missing)
            .await?
            .ok_or_else(|| NcloudError::DomainNotFound {
                domain: domain_name.to_string(),
            })?;

        let record = match self.find_record(&domain, &host, record_type, content).await? {
            Some(existing) => {
                self.update_record(&domain, existing.id, &host, record_type, content, ttl)
                    .await?
            }
            None => {
                self.create_record(&domain, &host, record_type, content, ttl)
                    .await?
            }
        };

        Ok((domain, record))
    }

    /// Deletes the record matching (host from the name, type, content),
    /// then unconditionally applies the zone's pending changes.
    ///
    /// Fails with [`NcloudError::RecordNotFound`] when no live record
    /// matches, and [`NcloudError::DomainNotFound`] when the zone itself
    /// is not registered.
    pub async fn delete_record(
        &self,
        domain_name: &str,
        record_type: &str,
        content: &str,
    ) -> Result<()> {
        let (_, subdomain) = split_domain(domain_name)?;
        let host = normalize_host(&subdomain);

        let domain = self
            .ensure_domain(domain_name, false)
            .await?
            .ok_or_else(|| NcloudError::DomainNotFound {
                domain: domain_name.to_string(),
            })?;

        let record = self
            .find_record(&domain, &host, record_type, content)
            .await?
            .ok_or_else(|| NcloudError::RecordNotFound {
                domain: domain_name.to_string(),
                record_type: record_type.to_string(),
                content: content.to_string(),
            })?;

        let path = format!("/dns/v1/ncpdns/record/{}", domain.id);
        let body = Self::encode_body(&[record.id])?;
        self.request_text(Method::DELETE, &self.dns_endpoint, &path, Some(body))
            .await?;

        self.apply_domain(&domain).await
    }

    /// 创建记录并从创建响应中取出新记录
    async fn create_record(
        &self,
        domain: &Domain,
        host: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
    ) -> Result<DnsRecord> {
        let path = format!("/dns/v1/ncpdns/record/{}", domain.id);
        let body = Self::encode_body(&[RecordCreateRequest {
            host: host.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            ttl,
        }])?;

        let created: Vec<DnsRecord> = self
            .request_json(Method::POST, &self.dns_endpoint, &path, Some(body))
            .await?;

        find_matching(created, host, record_type, content).ok_or_else(|| {
            NcloudError::UnexpectedResponse {
                detail: format!(
                    "record '{host} {record_type} {content}' missing from creation response"
                ),
            }
        })
    }

    /// 按 id 更新记录。到达此分支时 content 已与期望一致，实际是
    /// TTL 刷新路径。
    async fn update_record(
        &self,
        domain: &Domain,
        record_id: i64,
        host: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
    ) -> Result<DnsRecord> {
        let path = format!("/dns/v1/ncpdns/record/{}", domain.id);
        let body = Self::encode_body(&[RecordUpdateRequest {
            id: record_id,
            host: host.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            ttl,
        }])?;

        self.request_text(Method::PUT, &self.dns_endpoint, &path, Some(body))
            .await?;

        // 按 id 更新是幂等的；提交的字段即更新后的记录
        Ok(DnsRecord {
            id: record_id,
            host: host.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            ttl,
            del_yn: false,
            apply_yn: false,
        })
    }
}
