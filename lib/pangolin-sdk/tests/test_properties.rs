mod common;

use common::{amount, usdc, usdt};
use pangolin_sdk::{Address, ChainId, Fraction, Pair, SdkError, Token, TokenAmount, Uint256};
use proptest::prelude::*;

fn pair(reserve_usdt: u128, reserve_usdc: u128) -> Pair {
    Pair::new(amount(&usdt(), reserve_usdt), amount(&usdc(), reserve_usdc)).unwrap()
}

fn token_at(bytes: [u8; 20]) -> Token {
    Token::from_parts(ChainId::Mainnet, Address::new(bytes), 18, None, None)
}

fn k(pair: &Pair) -> Uint256 {
    pair.reserve0()
        .raw()
        .checked_mul(pair.reserve1().raw())
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 2_000, .. ProptestConfig::default() })]

    #[test]
    fn pair_address_ignores_argument_order(a in any::<[u8; 20]>(), b in any::<[u8; 20]>()) {
        prop_assume!(a != b);
        let (token_a, token_b) = (token_at(a), token_at(b));
        let forward = Pair::get_address(&token_a, &token_b).unwrap();
        let backward = Pair::get_address(&token_b, &token_a).unwrap();
        prop_assert_eq!(forward, backward);

        let built = Pair::new(
            TokenAmount::new(token_b.clone(), Uint256::one()),
            TokenAmount::new(token_a.clone(), Uint256::one()),
        ).unwrap();
        prop_assert!(built.token0().address() < built.token1().address());
        prop_assert_eq!(built.address(), &forward);
    }

    #[test]
    fn swap_output_is_monotonic_and_bounded(
        reserve0 in 1_000u128..10u128.pow(30),
        reserve1 in 1_000u128..10u128.pow(30),
        x in 1u128..10u128.pow(27),
        extra in 0u128..10u128.pow(27),
    ) {
        let pair = pair(reserve0, reserve1);
        let small = pair.get_output_amount(&amount(&usdt(), x));
        let large = pair.get_output_amount(&amount(&usdt(), x + extra));
        match (small, large) {
            (Ok((small, _)), Ok((large, next))) => {
                prop_assert!(small.raw() <= large.raw());
                prop_assert!(large.raw() < pair.reserve1().raw());
                // the fee only ever grows k
                prop_assert!(k(&next) >= k(&pair));
            }
            (Err(SdkError::InsufficientReserves), _) => {}
            (Ok(_), Err(e)) => prop_assert!(false, "larger input failed: {:?}", e),
            (Err(e), _) => prop_assert!(false, "unexpected error: {:?}", e),
        }
    }

    #[test]
    fn input_quote_never_under_quotes(
        reserve0 in 1_000u128..10u128.pow(30),
        reserve1 in 1_000u128..10u128.pow(30),
        w in any::<u128>(),
    ) {
        let pair = pair(reserve0, reserve1);
        let wanted = 1 + w % (reserve1 - 1);
        let (input, _) = pair.get_input_amount(&amount(&usdc(), wanted)).unwrap();
        let (received, _) = pair.get_output_amount(&input).unwrap();
        prop_assert!(*received.raw() >= Uint256::from(wanted));
    }

    #[test]
    fn output_quote_round_trips_to_at_most_input(
        reserve0 in 1_000u128..10u128.pow(30),
        reserve1 in 1_000u128..10u128.pow(30),
        x in 1u128..10u128.pow(27),
    ) {
        let pair = pair(reserve0, reserve1);
        if let Ok((output, _)) = pair.get_output_amount(&amount(&usdt(), x)) {
            let (input, _) = pair.get_input_amount(&output).unwrap();
            prop_assert!(*input.raw() <= Uint256::from(x));
        }
    }

    #[test]
    fn fraction_add_then_subtract_is_identity(
        a in -1_000_000i64..1_000_000,
        b in 1i64..1_000_000,
        c in -1_000_000i64..1_000_000,
        d in 1i64..1_000_000,
    ) {
        let x = Fraction::new(a, b).unwrap();
        let y = Fraction::new(c, d).unwrap();
        prop_assert_eq!(x.add(&y).subtract(&y), x.clone());
        prop_assert_eq!(x.multiply(&y).reduced(), x.multiply(&y));
    }

    #[test]
    fn token_amount_respects_ceiling(raw in any::<u128>(), shift in 0u32..200) {
        let value = num_bigint::BigUint::from(raw) << shift;
        let result = TokenAmount::from_big(usdc(), value.clone());
        if value.bits() <= 256 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }
}
