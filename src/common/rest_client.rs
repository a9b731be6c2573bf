//! Aptos fullnode REST API 客户端（仅负责状态查询与交易提交，不参与签名）

use anyhow::{Result, anyhow};
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::common::types::InfrastructureConfig;
use crate::utils::escape::escape_type_path;

/// Content type the fullnode expects for signed BCS transaction bodies.
const BCS_SIGNED_TRANSACTION: &str = "application/x.aptos.signed_transaction+bcs";

/// One on-chain resource of an account, as returned by the fullnode.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResource {
    /// Fully-qualified resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Resource payload; shape depends on the type, so the raw JSON is kept
    /// and parsed by the caller.
    pub data: Value,
}

/// Receipt for a submitted transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
}

/// Aptos REST 客户端
///
/// Thin wrapper over the fullnode v1 API. It performs no retries and no
/// caching; timeout policy is whatever the configured HTTP client enforces.
#[derive(Clone)]
pub struct AptosRestClient {
    http: Client,
    pub config: InfrastructureConfig,
}

impl AptosRestClient {
    /// 使用给定配置创建新的 REST 客户端
    pub fn new(config: InfrastructureConfig) -> Result<Self> {
        let timeout = Duration::from_millis(config.timeout_millis);
        let http = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .tcp_nodelay(true)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self { http, config })
    }

    /// 使用默认配置（主网 fullnode + 10s 超时）创建客户端
    pub fn mainnet_default() -> Result<Self> {
        Self::new(InfrastructureConfig::default())
    }

    #[inline]
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v1/{}",
            self.config.rest_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fetch one resource of an account. Returns `Ok(None)` when the account
    /// does not hold the resource (HTTP 404).
    ///
    /// `resource_type` may be a generic type path; it is percent-escaped
    /// before being used as a URL segment.
    pub async fn get_account_resource(
        &self,
        address: &str,
        resource_type: &str,
    ) -> Result<Option<AccountResource>> {
        let url = self.endpoint(&format!(
            "accounts/{}/resource/{}",
            address,
            escape_type_path(resource_type)
        ));
        tracing::debug!(%url, "fetching account resource");

        let resp = self.http.get(url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp.error_for_status()?;
        let resource = resp.json::<AccountResource>().await?;
        Ok(Some(resource))
    }

    /// Submit an already-signed BCS transaction. Signing and retry policy
    /// belong to the caller; this does exactly one POST.
    pub async fn submit_signed_bcs(&self, signed_txn: Vec<u8>) -> Result<PendingTransaction> {
        let url = self.endpoint("transactions");
        tracing::debug!(%url, bytes = signed_txn.len(), "submitting signed transaction");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, BCS_SIGNED_TRANSACTION)
            .body(signed_txn)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("transaction submission failed ({}): {}", status, body));
        }
        let pending = resp.json::<PendingTransaction>().await?;
        tracing::info!(hash = %pending.hash, "transaction accepted by fullnode");
        Ok(pending)
    }
}
