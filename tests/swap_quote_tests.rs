//! 兑换报价集成测试
//!
//! 覆盖：
//! - 参考场景的逐字数值（与链上 floor 除法一致）
//! - 报价的单调性 / 上界等性质（proptest）
//!
//! 运行测试:
//!     cargo test --test swap_quote_tests -- --nocapture

use aptos_trade_sdk::utils::calc::constant_product::{
    get_amount_out, min_amount_out, quote_exact_in,
};
use num_bigint::BigUint;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

/// 参考场景：1:2 池，输入 100_000，手续费 30 bps，滑点 0.5%
#[test]
fn test_reference_scenario() {
    let reserve_in = big(1_000_000);
    let reserve_out = big(2_000_000);
    let amount_in = big(100_000);

    // after_fee = 100_000 * 9970 / 10000 = 99_700
    // expected  = 2_000_000 - floor(2_000_000_000_000 / 1_099_700) = 181_323
    // min       = floor(181_323 * 0.995) = 180_416
    let quote =
        quote_exact_in(&reserve_in, &reserve_out, &amount_in, 30, Decimal::new(5, 3)).unwrap();
    println!("✅ expected = {}, min = {}", quote.amount_out_expected, quote.amount_out_min);
    assert_eq!(quote.amount_out_expected, big(181_323));
    assert_eq!(quote.amount_out_min, big(180_416));
    assert_eq!(quote.fee_bps, 30);
}

#[test]
fn test_zero_slippage_keeps_expected_output() {
    let quote =
        quote_exact_in(&big(1_000_000), &big(2_000_000), &big(100_000), 30, Decimal::ZERO)
            .unwrap();
    assert_eq!(quote.amount_out_min, quote.amount_out_expected);
}

#[test]
fn test_min_out_never_exceeds_expected() {
    for bps in [0u32, 1, 50, 100, 999] {
        let slippage = Decimal::new(bps as i64, 4);
        let expected = big(181_323);
        let min = min_amount_out(&expected, slippage).unwrap();
        assert!(min <= expected, "slippage {} lifted the minimum", slippage);
    }
}

proptest! {
    /// 输出随输入单调不减
    #[test]
    fn prop_amount_out_is_monotone(
        reserve_in in 1_000u64..1_000_000_000_000,
        reserve_out in 1_000u64..1_000_000_000_000,
        amount in 1u64..1_000_000_000,
        delta in 1u64..1_000_000,
        fee_bps in 0u64..10_000,
    ) {
        let r_in = big(reserve_in);
        let r_out = big(reserve_out);
        let out_small = get_amount_out(&r_in, &r_out, &big(amount), fee_bps);
        let out_large = get_amount_out(&r_in, &r_out, &big(amount + delta), fee_bps);
        match (out_small, out_large) {
            (Ok(s), Ok(l)) => prop_assert!(s <= l),
            // Only the larger input may trip the drain guard.
            (Ok(_), Err(_)) => {}
            (Err(_), Ok(_)) => prop_assert!(false, "smaller input failed where larger succeeded"),
            (Err(_), Err(_)) => {}
        }
    }

    /// 输出永远严格小于对侧储备
    #[test]
    fn prop_amount_out_is_bounded_by_reserve(
        reserve_in in 1u64..1_000_000_000_000,
        reserve_out in 1u64..1_000_000_000_000,
        amount in 1u64..u64::MAX / 2,
        fee_bps in 0u64..10_000,
    ) {
        if let Ok(out) = get_amount_out(&big(reserve_in), &big(reserve_out), &big(amount), fee_bps) {
            prop_assert!(out < big(reserve_out));
        }
    }

    /// 无手续费时边际收益递减：out(2a) <= 2 * out(a)
    #[test]
    fn prop_zero_fee_output_is_concave(
        reserve_in in 1_000u64..1_000_000_000_000,
        reserve_out in 1_000u64..1_000_000_000_000,
        amount in 1u64..1_000_000_000,
    ) {
        let r_in = big(reserve_in);
        let r_out = big(reserve_out);
        let once = get_amount_out(&r_in, &r_out, &big(amount), 0);
        let doubled = get_amount_out(&r_in, &r_out, &big(2 * amount), 0);
        match (once, doubled) {
            (Ok(a), Ok(b)) => prop_assert!(b <= big(2u64) * a),
            (Ok(_), Err(_)) => {}
            (Err(_), Ok(_)) => prop_assert!(false, "single trade failed where doubled succeeded"),
            (Err(_), Err(_)) => {}
        }
    }

    /// 任意滑点下最小输出不超过预期输出
    #[test]
    fn prop_min_out_le_expected(
        expected in 0u64..u64::MAX,
        slippage_bps in 0u32..10_000,
    ) {
        let expected = big(expected);
        let min = min_amount_out(&expected, Decimal::new(slippage_bps as i64, 4)).unwrap();
        prop_assert!(min <= expected);
    }
}
