use crate::address::Address;
use crate::config::{Deployment, DeploymentConfig};
use crate::constants::{
    ChainId, FEES_DENOMINATOR, FEES_NUMERATOR, MINIMUM_LIQUIDITY, PAIR_DECIMALS, PAIR_NAME,
    PAIR_SYMBOL, PROTOCOL_FEE_FACTOR,
};
use crate::entities::fractions::{Price, TokenAmount};
use crate::entities::pair_address::PairAddressCache;
use crate::entities::token::Token;
use crate::error::{Result, SdkError};
use crate::math::{sqrt, Uint256};
use tracing::debug;

/// A reserve snapshot of one pool.
///
/// `token_amounts[0]` always holds the token whose address sorts first, no
/// matter the order the reserves were handed in. A pair never changes: a swap
/// simulation hands back a new pair with the post-trade reserves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    liquidity_token: Token,
    token_amounts: [TokenAmount; 2],
}

impl Pair {
    /// Builds a pair against the built-in deployment of the tokens' chain.
    pub fn new(token_amount_a: TokenAmount, token_amount_b: TokenAmount) -> Result<Self> {
        let chain_id = token_amount_a.token().chain_id();
        if chain_id != token_amount_b.token().chain_id() {
            return Err(SdkError::ChainMismatch);
        }
        let deployment = DeploymentConfig::default_config().deployment(chain_id)?;
        Self::new_with(token_amount_a, token_amount_b, deployment)
    }

    pub fn new_with(
        token_amount_a: TokenAmount,
        token_amount_b: TokenAmount,
        deployment: &Deployment,
    ) -> Result<Self> {
        let token_amounts = if token_amount_a.token().sorts_before(token_amount_b.token())? {
            [token_amount_a, token_amount_b]
        } else {
            [token_amount_b, token_amount_a]
        };
        let address = PairAddressCache::global().get_or_derive(
            deployment,
            token_amounts[0].token().address(),
            token_amounts[1].token().address(),
        );
        let liquidity_token = Token::from_parts(
            token_amounts[0].token().chain_id(),
            address,
            PAIR_DECIMALS,
            Some(PAIR_SYMBOL),
            Some(PAIR_NAME),
        );
        Ok(Self {
            liquidity_token,
            token_amounts,
        })
    }

    /// Pool address of `token_a`/`token_b` under the built-in deployment.
    /// Argument order does not matter.
    pub fn get_address(token_a: &Token, token_b: &Token) -> Result<Address> {
        let deployment = DeploymentConfig::default_config().deployment(token_a.chain_id())?;
        Self::get_address_with(deployment, token_a, token_b)
    }

    pub fn get_address_with(
        deployment: &Deployment,
        token_a: &Token,
        token_b: &Token,
    ) -> Result<Address> {
        let (token0, token1) = if token_a.sorts_before(token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Ok(PairAddressCache::global().get_or_derive(
            deployment,
            token0.address(),
            token1.address(),
        ))
    }

    pub fn address(&self) -> &Address {
        self.liquidity_token.address()
    }

    pub fn chain_id(&self) -> ChainId {
        self.token0().chain_id()
    }

    pub fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    pub fn token0(&self) -> &Token {
        self.token_amounts[0].token()
    }

    pub fn token1(&self) -> &Token {
        self.token_amounts[1].token()
    }

    pub fn reserve0(&self) -> &TokenAmount {
        &self.token_amounts[0]
    }

    pub fn reserve1(&self) -> &TokenAmount {
        &self.token_amounts[1]
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        token == self.token0() || token == self.token1()
    }

    /// token1 per token0, `reserve1 / reserve0`.
    pub fn token0_price(&self) -> Result<Price> {
        Price::from_amounts(self.reserve0(), self.reserve1())
    }

    /// token0 per token1, `reserve0 / reserve1`.
    pub fn token1_price(&self) -> Result<Price> {
        Price::from_amounts(self.reserve1(), self.reserve0())
    }

    pub fn price_of(&self, token: &Token) -> Result<Price> {
        if token == self.token0() {
            self.token0_price()
        } else if token == self.token1() {
            self.token1_price()
        } else {
            Err(SdkError::InvalidToken)
        }
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount> {
        if token == self.token0() {
            Ok(self.reserve0())
        } else if token == self.token1() {
            Ok(self.reserve1())
        } else {
            Err(SdkError::InvalidToken)
        }
    }

    fn other_token(&self, token: &Token) -> &Token {
        if token == self.token0() {
            self.token1()
        } else {
            self.token0()
        }
    }

    /// Same pool, new reserves. Both amounts must be this pair's tokens.
    fn with_reserves(&self, amount_a: TokenAmount, amount_b: TokenAmount) -> Pair {
        let token_amounts = if amount_a.token() == self.token0() {
            [amount_a, amount_b]
        } else {
            [amount_b, amount_a]
        };
        Pair {
            liquidity_token: self.liquidity_token.clone(),
            token_amounts,
        }
    }

    fn has_empty_reserve(&self) -> bool {
        self.reserve0().is_zero() || self.reserve1().is_zero()
    }

    /// Exact-in quote: what `input_amount` buys, rounded down, plus the pair
    /// as it would look after the swap.
    ///
    /// ```text
    /// input_after_fee = input * 9975
    /// output          = input_after_fee * output_reserve
    ///                   / (input_reserve * 10000 + input_after_fee)
    /// ```
    ///
    /// # Errors
    /// * [`SdkError::InvalidToken`] when the input token is not in the pair.
    /// * [`SdkError::InsufficientReserves`] when a reserve is empty or the
    ///   output rounds to zero.
    /// * [`SdkError::Overflow`] when an intermediate leaves `uint256`.
    pub fn get_output_amount(&self, input_amount: &TokenAmount) -> Result<(TokenAmount, Pair)> {
        if !self.involves_token(input_amount.token()) {
            return Err(SdkError::InvalidToken);
        }
        if self.has_empty_reserve() {
            debug!(pair = %self.address(), "swap rejected: empty reserve");
            return Err(SdkError::InsufficientReserves);
        }
        let input_reserve = self.reserve_of(input_amount.token())?;
        let output_reserve = self.reserve_of(self.other_token(input_amount.token()))?;

        let input_amount_with_fee = input_amount
            .raw()
            .checked_mul(&Uint256::from(FEES_NUMERATOR))?;
        let numerator = input_amount_with_fee.checked_mul(output_reserve.raw())?;
        let denominator = input_reserve
            .raw()
            .checked_mul(&Uint256::from(FEES_DENOMINATOR))?
            .checked_add(&input_amount_with_fee)?;
        let output = numerator.checked_div(&denominator)?;

        if output.is_zero() || output >= *output_reserve.raw() {
            debug!(
                pair = %self.address(),
                input = %input_amount.raw(),
                output = %output,
                "swap rejected: output out of range"
            );
            return Err(SdkError::InsufficientReserves);
        }

        let output_amount = TokenAmount::new(output_reserve.token().clone(), output);
        let next = self.with_reserves(
            input_reserve.add(input_amount)?,
            output_reserve.subtract(&output_amount)?,
        );
        Ok((output_amount, next))
    }

    /// Exact-out quote: the smallest input (rounded up) that yields
    /// `output_amount`, plus the pair after the swap.
    ///
    /// # Errors
    /// * [`SdkError::InvalidToken`] when the output token is not in the pair.
    /// * [`SdkError::InsufficientReserves`] when a reserve is empty or the
    ///   requested output is not below the reserve.
    pub fn get_input_amount(&self, output_amount: &TokenAmount) -> Result<(TokenAmount, Pair)> {
        if !self.involves_token(output_amount.token()) {
            return Err(SdkError::InvalidToken);
        }
        let output_reserve = self.reserve_of(output_amount.token())?;
        if self.has_empty_reserve() || output_amount.raw() >= output_reserve.raw() {
            debug!(
                pair = %self.address(),
                output = %output_amount.raw(),
                "swap rejected: output not below reserve"
            );
            return Err(SdkError::InsufficientReserves);
        }
        let input_reserve = self.reserve_of(self.other_token(output_amount.token()))?;

        let numerator = input_reserve
            .raw()
            .checked_mul(output_amount.raw())?
            .checked_mul(&Uint256::from(FEES_DENOMINATOR))?;
        let denominator = output_reserve
            .raw()
            .checked_sub(output_amount.raw())?
            .checked_mul(&Uint256::from(FEES_NUMERATOR))?;
        let input = numerator.div_ceil(&denominator)?;

        let input_amount = TokenAmount::new(input_reserve.token().clone(), input);
        let next = self.with_reserves(
            input_reserve.add(&input_amount)?,
            output_reserve.subtract(output_amount)?,
        );
        Ok((input_amount, next))
    }

    /// Liquidity tokens minted for depositing `token_amount_a` and
    /// `token_amount_b`, in either order.
    ///
    /// The first deposit into an empty pool mints `sqrt(a0 * a1) - 1000`,
    /// later ones `min(a0 * S / r0, a1 * S / r1)`.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        token_amount_a: &TokenAmount,
        token_amount_b: &TokenAmount,
    ) -> Result<TokenAmount> {
        if *total_supply.token() != self.liquidity_token {
            return Err(SdkError::InvalidToken);
        }
        let (amount0, amount1) = if token_amount_a.token() == self.token0()
            && token_amount_b.token() == self.token1()
        {
            (token_amount_a, token_amount_b)
        } else if token_amount_a.token() == self.token1() && token_amount_b.token() == self.token0()
        {
            (token_amount_b, token_amount_a)
        } else {
            return Err(SdkError::InvalidToken);
        };

        let liquidity = if total_supply.is_zero() {
            let root = sqrt(&amount0.raw().checked_mul(amount1.raw())?);
            let minimum = Uint256::from(MINIMUM_LIQUIDITY);
            if root <= minimum {
                debug!(pair = %self.address(), root = %root, "first deposit below minimum liquidity");
                return Err(SdkError::InvalidAmount);
            }
            root.checked_sub(&minimum)?
        } else {
            let liquidity0 = amount0
                .raw()
                .checked_mul(total_supply.raw())?
                .checked_div(self.reserve0().raw())?;
            let liquidity1 = amount1
                .raw()
                .checked_mul(total_supply.raw())?
                .checked_div(self.reserve1().raw())?;
            liquidity0.min(liquidity1)
        };

        if liquidity.is_zero() {
            debug!(pair = %self.address(), "deposit mints no liquidity");
            return Err(SdkError::InvalidAmount);
        }
        Ok(TokenAmount::new(self.liquidity_token.clone(), liquidity))
    }

    /// Share of `token` that burning `liquidity` pays out.
    ///
    /// With `k_last = Some(k)` the protocol fee is on: when the pool grew
    /// since `k` was recorded, the supply is first inflated by the liquidity
    /// the fee recipient would be minted.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        k_last: Option<&Uint256>,
    ) -> Result<TokenAmount> {
        if !self.involves_token(token)
            || *total_supply.token() != self.liquidity_token
            || *liquidity.token() != self.liquidity_token
        {
            return Err(SdkError::InvalidToken);
        }
        if liquidity.raw() > total_supply.raw() {
            return Err(SdkError::InvalidAmount);
        }

        let supply = match k_last {
            Some(k_last) if !k_last.is_zero() => {
                self.fee_adjusted_supply(total_supply.raw(), k_last)?
            }
            _ => total_supply.raw().clone(),
        };
        let value = liquidity
            .raw()
            .checked_mul(self.reserve_of(token)?.raw())?
            .checked_div(&supply)?;

        if value.is_zero() {
            debug!(pair = %self.address(), token = %token, "burn pays out nothing");
            return Err(SdkError::InvalidAmount);
        }
        Ok(TokenAmount::new(token.clone(), value))
    }

    fn fee_adjusted_supply(&self, total_supply: &Uint256, k_last: &Uint256) -> Result<Uint256> {
        let root_k = sqrt(&self.reserve0().raw().checked_mul(self.reserve1().raw())?);
        let root_k_last = sqrt(k_last);
        if root_k <= root_k_last {
            return Ok(total_supply.clone());
        }
        let numerator = total_supply.checked_mul(&root_k.checked_sub(&root_k_last)?)?;
        let denominator = root_k
            .checked_mul(&Uint256::from(PROTOCOL_FEE_FACTOR))?
            .checked_add(&root_k_last)?;
        let fee_liquidity = numerator.checked_div(&denominator)?;
        total_supply.checked_add(&fee_liquidity)
    }
}
