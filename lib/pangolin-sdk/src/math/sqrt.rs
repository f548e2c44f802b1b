use crate::math::bounded::Uint256;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Floor square root, Babylonian method. Steps through the same iterates as
/// the pair contract's `Math.sqrt`, so results agree for every input.
pub fn sqrt(y: &Uint256) -> Uint256 {
    let y = y.as_biguint();
    let z = if *y > BigUint::from(3u32) {
        let mut z = y.clone();
        let mut x: BigUint = y / 2u32 + 1u32;
        while x < z {
            z = x.clone();
            x = (y / &x + &x) / 2u32;
        }
        z
    } else if !y.is_zero() {
        BigUint::one()
    } else {
        BigUint::zero()
    };
    // sqrt never grows a value, so the ceiling still holds
    Uint256::within_bounds(z)
}
