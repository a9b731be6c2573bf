pub mod coin;
pub mod error;
pub mod rest_client;
pub mod types;

pub use coin::{CoinInfo, CoinRegistry};
pub use error::{TradeError, TradeResult};
pub use rest_client::{AccountResource, AptosRestClient, PendingTransaction};
pub use types::{AnyResult, InfrastructureConfig};
