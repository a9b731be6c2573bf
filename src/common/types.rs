use std::hash::{Hash, Hasher};

/// Infrastructure-only configuration (wallet-independent)
///
/// Can be shared across multiple wallets using the same fullnode setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfrastructureConfig {
    /// Fullnode REST base host, e.g. `https://fullnode.mainnet.aptoslabs.com`
    pub rest_url: String,
    /// Request timeout in milliseconds.
    pub timeout_millis: u64,
}

impl InfrastructureConfig {
    pub fn new(rest_url: String, timeout_millis: u64) -> Self {
        Self { rest_url, timeout_millis }
    }

    /// Generate a cache key for this infrastructure configuration
    pub fn cache_key(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        format!("{:x}", hasher.finish())
    }
}

impl Hash for InfrastructureConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rest_url.hash(state);
        self.timeout_millis.hash(state);
    }
}

impl Default for InfrastructureConfig {
    fn default() -> Self {
        Self {
            rest_url: "https://fullnode.mainnet.aptoslabs.com".to_string(),
            timeout_millis: 10_000,
        }
    }
}

pub type AnyResult<T> = anyhow::Result<T>;
