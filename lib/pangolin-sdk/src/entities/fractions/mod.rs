pub mod fraction;
pub mod percent;
pub mod price;
pub mod token_amount;

pub use fraction::Fraction;
pub use percent::Percent;
pub use price::Price;
pub use token_amount::TokenAmount;
