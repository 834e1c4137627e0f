//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use chrono::Utc;
use ncloud_provider::NcloudClient;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录主机名
pub fn generate_test_host() -> String {
    format!("_test-{}", Utc::now().timestamp_millis())
}

/// 测试上下文 - 封装客户端和测试域名
pub struct TestContext {
    pub client: NcloudClient,
    pub domain: String,
}

impl TestContext {
    /// 从环境变量创建测试上下文
    pub fn from_env() -> Option<Self> {
        let access_key = env::var("NCLOUD_ACCESS_KEY").ok()?;
        let secret_key = env::var("NCLOUD_SECRET_KEY").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        Some(Self {
            client: NcloudClient::new(access_key, secret_key),
            domain,
        })
    }

    /// 测试记录的完整域名
    pub fn test_fqdn(&self, host: &str) -> String {
        format!("{host}.{}", self.domain)
    }

    /// 清理测试遗留的记录（忽略清理失败）
    pub async fn cleanup_record(&self, fqdn: &str, record_type: &str) {
        if let Err(e) = self.client.delete_record(fqdn, record_type, "").await {
            eprintln!("cleanup of {fqdn} {record_type} failed (ignored): {e}");
        }
    }
}
