pub mod bounded;
pub mod sqrt;

pub use bounded::{BoundedUint, Uint256, Uint8, Width, W256, W8};
pub use sqrt::sqrt;
