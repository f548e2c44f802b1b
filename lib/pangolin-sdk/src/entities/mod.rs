pub mod fractions;
pub mod pair;
pub mod pair_address;
pub mod token;

pub use fractions::{Fraction, Percent, Price, TokenAmount};
pub use pair::Pair;
pub use pair_address::PairAddressCache;
pub use token::{wavax, Token};
