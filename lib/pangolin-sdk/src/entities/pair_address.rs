use crate::address::{get_create2_address, keccak256, Address, InitCodeHash};
use crate::config::Deployment;
use ahash::RandomState;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::trace;

static GLOBAL_PAIR_ADDRESS_CACHE: Lazy<PairAddressCache> = Lazy::new(PairAddressCache::new);

type CacheKey = (Address, InitCodeHash, Address, Address);

/// Memoized CREATE2 results. Entries never change once written, so the map
/// only grows and is never evicted.
#[derive(Debug)]
pub struct PairAddressCache(DashMap<CacheKey, Address, RandomState>);

impl PairAddressCache {
    pub fn new() -> Self {
        Self(DashMap::with_hasher(RandomState::default()))
    }

    /// Process-wide instance, created on first use.
    pub fn global() -> &'static PairAddressCache {
        &GLOBAL_PAIR_ADDRESS_CACHE
    }

    /// `token0` and `token1` must already be sorted.
    pub fn get_or_derive(
        &self,
        deployment: &Deployment,
        token0: &Address,
        token1: &Address,
    ) -> Address {
        let key = (deployment.factory, deployment.init_code_hash, *token0, *token1);
        if let Some(found) = self.0.get(&key) {
            return *found;
        }
        let derived = derive_pair_address(deployment, token0, token1);
        trace!(%token0, %token1, pair = %derived, "pair address cache miss");
        *self.0.entry(key).or_insert(derived)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PairAddressCache {
    fn default() -> Self {
        Self::new()
    }
}

/// `salt = keccak256(token0 ++ token1)` over the packed 20-byte addresses.
pub fn derive_pair_address(deployment: &Deployment, token0: &Address, token1: &Address) -> Address {
    let salt = keccak256(&[&token0.as_bytes()[..], &token1.as_bytes()[..]]);
    get_create2_address(&deployment.factory, &salt, &deployment.init_code_hash)
}
