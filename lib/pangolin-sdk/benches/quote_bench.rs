use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pangolin_sdk::{
    ChainId, DeploymentConfig, Pair, PairAddressCache, Rounding, Token, TokenAmount, Uint256,
};
use std::str::FromStr;
use std::time::Duration;

fn token(address: &str, symbol: &str) -> Token {
    Token::new(ChainId::Mainnet, address, 18, Some(symbol), None).unwrap()
}

fn bench_pair_quote(c: &mut Criterion) {
    let usdc = token("0xea32a96608495e54156ae48931a7c20f0dcc1a21", "USDC");
    let usdt = token("0xbb06dca3ae6887fabf931640f67cab3e3a16f4dc", "USDT");
    let pair = Pair::new(
        TokenAmount::from_raw(usdc.clone(), "2000000000000000000000000").unwrap(),
        TokenAmount::from_raw(usdt.clone(), "1000000000000000000000000").unwrap(),
    )
    .unwrap();
    let input = TokenAmount::new(usdt.clone(), Uint256::from_str("1000000000000000000").unwrap());
    let wanted = TokenAmount::new(usdc.clone(), Uint256::from_str("1000000000000000000").unwrap());
    let deployment = *DeploymentConfig::default_config()
        .deployment(ChainId::Mainnet)
        .unwrap();

    let mut group = c.benchmark_group("bench_pair_quote");
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(5));
    group.bench_function("get_output_amount", |b| {
        b.iter(|| pair.get_output_amount(black_box(&input)).unwrap())
    });
    group.bench_function("get_input_amount", |b| {
        b.iter(|| pair.get_input_amount(black_box(&wanted)).unwrap())
    });
    group.bench_function("token0_price_to_significant", |b| {
        b.iter(|| {
            pair.token0_price()
                .unwrap()
                .to_significant(6, Rounding::RoundHalfUp)
                .unwrap()
        })
    });
    group.bench_function("get_address_cached", |b| {
        b.iter(|| Pair::get_address(black_box(&usdc), black_box(&usdt)).unwrap())
    });
    group.bench_function("get_address_uncached", |b| {
        b.iter(|| {
            let cache = PairAddressCache::new();
            cache.get_or_derive(&deployment, usdt.address(), usdc.address())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_pair_quote);
criterion_main!(benches);
