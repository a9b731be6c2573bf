pub mod abi;
pub mod common;
pub mod constants;
pub mod instruction;
pub mod utils;

use std::sync::Arc;

use anyhow::anyhow;
use num_bigint::BigUint;
use rust_decimal::Decimal;

pub use crate::abi::{EncodedPayload, TransactionPayload};
pub use crate::common::coin::{CoinInfo, CoinRegistry};
pub use crate::common::error::{TradeError, TradeResult};
pub use crate::common::rest_client::{AptosRestClient, PendingTransaction};
pub use crate::common::types::{AnyResult, InfrastructureConfig};
pub use crate::instruction::liquidswap::{SwapDirection, SwapParams};
pub use crate::utils::quote::SwapQuote;

use crate::constants::liquidswap::{
    DEFAULT_FEE_BPS, DEFAULT_SLIPPAGE_BPS, MAINNET_POOL_ADDRESS, MAINNET_SCRIPT_ADDRESS,
    UNCORRELATED_CURVE,
};
use crate::instruction::liquidswap::{
    build_register_coin_payload, build_swap_payload, coin_store_type,
};
use crate::instruction::utils::liquidswap::{PoolReserves, parse_pool_reserves, pool_resource_type};
use crate::utils::calc::constant_product;

/// Where the Liquidswap deployment lives and how its pools are priced.
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    /// Address the `scripts`/`liquidity_pool`/`curves` modules are published
    /// under.
    pub script_address: String,
    /// Resource account holding the `LiquidityPool` resources.
    pub pool_address: String,
    /// Curve marker struct used for pair pricing.
    pub curve_type: String,
    /// Pool fee in basis points.
    pub fee_bps: u64,
}

impl ProtocolConfig {
    /// The production Liquidswap deployment with uncorrelated pools.
    pub fn mainnet() -> Self {
        Self {
            script_address: MAINNET_SCRIPT_ADDRESS.to_string(),
            pool_address: MAINNET_POOL_ADDRESS.to_string(),
            curve_type: format!("{}::{}", MAINNET_SCRIPT_ADDRESS, UNCORRELATED_CURVE),
            fee_bps: DEFAULT_FEE_BPS,
        }
    }
}

/// Main trading client for Liquidswap on Aptos
///
/// `TradingClient` ties the pieces together: the coin registry decides the
/// canonical pair order, the REST client reads the pool resource, the
/// constant-product math produces a quote, and the ABI layer turns the quote
/// into a submittable BCS payload. The client never signs anything; the
/// encoded payload is handed to the caller's wallet/submission layer.
pub struct TradingClient {
    /// REST client for fullnode interactions
    pub rest: Arc<AptosRestClient>,
    /// Read-only coin metadata, built once at construction
    pub registry: Arc<CoinRegistry>,
    /// Liquidswap deployment parameters
    pub protocol: ProtocolConfig,
}

impl TradingClient {
    pub fn new(
        infra: InfrastructureConfig,
        registry: CoinRegistry,
        protocol: ProtocolConfig,
    ) -> AnyResult<Self> {
        let rest = Arc::new(AptosRestClient::new(infra)?);
        Ok(Self { rest, registry: Arc::new(registry), protocol })
    }

    /// Client against the mainnet fullnode, the well-known coin set, and the
    /// production Liquidswap deployment.
    pub fn mainnet() -> AnyResult<Self> {
        Self::new(InfrastructureConfig::default(), CoinRegistry::mainnet(), ProtocolConfig::mainnet())
    }

    /// Default slippage tolerance as a decimal fraction.
    pub fn default_slippage() -> Decimal {
        Decimal::new(DEFAULT_SLIPPAGE_BPS as i64, 4)
    }

    /// Read the pool backing `(from_coin, to_coin)` and return its reserves
    /// in that trade direction.
    pub async fn fetch_pool_reserves(
        &self,
        from_coin: &str,
        to_coin: &str,
    ) -> AnyResult<PoolReserves> {
        let ((coin_x, coin_y), swapped) = self.registry.sorted_pair(from_coin, to_coin)?;
        let resource_type = pool_resource_type(
            &self.protocol.script_address,
            coin_x,
            coin_y,
            &self.protocol.curve_type,
        );
        let resource = self
            .rest
            .get_account_resource(&self.protocol.pool_address, &resource_type)
            .await?
            .ok_or_else(|| anyhow!("no liquidity pool for {}/{}", from_coin, to_coin))?;

        tracing::debug!(pool = %resource.resource_type, swapped, "fetched pool resource");
        Ok(parse_pool_reserves(&resource.data, swapped)?)
    }

    /// Quote an exact-in swap against the current pool state.
    pub async fn quote_exact_in(
        &self,
        from_coin: &str,
        to_coin: &str,
        amount_in: &BigUint,
        slippage: Decimal,
    ) -> AnyResult<SwapQuote> {
        let reserves = self.fetch_pool_reserves(from_coin, to_coin).await?;
        let quote = constant_product::quote_exact_in(
            &reserves.reserve_in,
            &reserves.reserve_out,
            amount_in,
            self.protocol.fee_bps,
            slippage,
        )?;
        tracing::info!(
            from = %from_coin,
            to = %to_coin,
            amount_in = %quote.amount_in,
            amount_out = %quote.amount_out_expected,
            min_out = %quote.amount_out_min,
            "quoted swap"
        );
        Ok(quote)
    }

    /// Quote an exact-in swap and build its submittable payload in one step.
    /// Returns both so callers can inspect the quote they are about to sign.
    pub async fn swap_exact_in(
        &self,
        from_coin: &str,
        to_coin: &str,
        amount_in: &BigUint,
        slippage: Decimal,
    ) -> AnyResult<(SwapQuote, EncodedPayload)> {
        let quote = self.quote_exact_in(from_coin, to_coin, amount_in, slippage).await?;
        let payload = build_swap_payload(&SwapParams {
            script_address: self.protocol.script_address.clone(),
            from_coin: from_coin.to_string(),
            to_coin: to_coin.to_string(),
            amount_in: quote.amount_in.clone(),
            amount_out: quote.amount_out_expected.clone(),
            direction: SwapDirection::ExactIn,
            slippage,
            curve_type: self.protocol.curve_type.clone(),
        })?;
        Ok((quote, payload))
    }

    /// Whether `account` has registered a store for `coin_type` (a recipient
    /// must register before it can receive the coin).
    pub async fn is_coin_registered(&self, account: &str, coin_type: &str) -> AnyResult<bool> {
        let store = coin_store_type(coin_type);
        Ok(self.rest.get_account_resource(account, &store).await?.is_some())
    }

    /// Payload registering `coin_type` for the signing account.
    pub fn register_coin_payload(&self, coin_type: &str) -> AnyResult<EncodedPayload> {
        Ok(build_register_coin_payload(coin_type)?)
    }
}
