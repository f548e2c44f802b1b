#![allow(dead_code)]

use pangolin_sdk::{ChainId, Token, TokenAmount, Uint256};
use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT_TRACING: Once = Once::new();

/// `RUST_LOG=pangolin_sdk=trace cargo test` shows the library's own events.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer().with_target(true))
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .try_init();
    });
}

pub const USDC_ADDRESS: &str = "0xea32a96608495e54156ae48931a7c20f0dcc1a21";
pub const USDT_ADDRESS: &str = "0xbb06dca3ae6887fabf931640f67cab3e3a16f4dc";

pub fn usdc() -> Token {
    Token::new(
        ChainId::Mainnet,
        USDC_ADDRESS,
        18,
        Some("USDC"),
        Some("USD Coin"),
    )
    .unwrap()
}

pub fn usdt() -> Token {
    Token::new(
        ChainId::Mainnet,
        USDT_ADDRESS,
        18,
        Some("USDT"),
        Some("USDT Stablecoin"),
    )
    .unwrap()
}

/// Same address as [`usdc`] but six decimals, for decimal-scaling checks.
pub fn usdc6() -> Token {
    Token::new(ChainId::Mainnet, USDC_ADDRESS, 6, Some("USDC"), None).unwrap()
}

pub fn amount(token: &Token, raw: u128) -> TokenAmount {
    TokenAmount::new(token.clone(), Uint256::from(raw))
}
