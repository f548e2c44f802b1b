use num_bigint::BigUint;
use pangolin_sdk::math::sqrt;
use pangolin_sdk::{SdkError, SolidityType, Uint256, Uint8};
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn u(value: u128) -> Uint256 {
    Uint256::from(value)
}

#[test]
fn test_parse() {
    assert_eq!(Uint256::from_str("12345").unwrap(), u(12_345));
    assert_eq!(Uint256::from_str("0x10").unwrap(), u(16));
    assert_eq!(Uint256::from_str("0XfF").unwrap(), u(255));
    for bad in ["", "0x", "12a", "+1", "-1", "1_000", " 1", "0x1g"] {
        assert!(
            matches!(Uint256::from_str(bad), Err(SdkError::InvalidNumber(_))),
            "{:?}",
            bad
        );
    }
}

#[test]
fn test_ceiling() {
    let max = Uint256::max_value();
    assert_eq!(max.to_hex(), format!("0x{}", "f".repeat(64)));
    assert_eq!(
        max.checked_add(&u(1)).unwrap_err(),
        SdkError::Overflow(SolidityType::Uint256)
    );
    assert_eq!(
        Uint256::try_from(BigUint::from(1u32) << 256u32).unwrap_err(),
        SdkError::Overflow(SolidityType::Uint256)
    );
    assert_eq!(Uint8::max_value().to_u8(), 255);
    assert_eq!(
        Uint8::try_from(256u32).unwrap_err(),
        SdkError::Overflow(SolidityType::Uint8)
    );
    assert_eq!(
        Uint8::from(200u8).checked_add(&Uint8::from(56u8)).unwrap_err(),
        SdkError::Overflow(SolidityType::Uint8)
    );
}

#[test]
fn test_checked_arithmetic() {
    assert_eq!(u(7).checked_add(&u(5)).unwrap(), u(12));
    assert_eq!(u(7).checked_sub(&u(5)).unwrap(), u(2));
    assert_eq!(u(5).checked_sub(&u(7)).unwrap_err(), SdkError::Underflow);
    assert_eq!(u(7).checked_mul(&u(5)).unwrap(), u(35));
    assert_eq!(u(7).checked_div(&u(2)).unwrap(), u(3));
    assert_eq!(u(7).checked_rem(&u(4)).unwrap(), u(3));
    assert_eq!(u(7).checked_div(&u(0)).unwrap_err(), SdkError::DivisionByZero);
    assert_eq!(u(7).checked_rem(&u(0)).unwrap_err(), SdkError::DivisionByZero);
}

#[test]
fn test_div_ceil() {
    assert_eq!(u(7).div_ceil(&u(2)).unwrap(), u(4));
    assert_eq!(u(6).div_ceil(&u(2)).unwrap(), u(3));
    assert_eq!(u(0).div_ceil(&u(9)).unwrap(), u(0));
    assert_eq!(u(1).div_ceil(&u(0)).unwrap_err(), SdkError::DivisionByZero);
}

#[test]
fn test_checked_pow() {
    assert_eq!(u(2).checked_pow(255).unwrap().to_hex(), format!("0x8{}", "0".repeat(63)));
    assert_eq!(
        u(2).checked_pow(256).unwrap_err(),
        SdkError::Overflow(SolidityType::Uint256)
    );
    assert!(u(10).checked_pow(77).is_ok());
    assert_eq!(
        u(10).checked_pow(78).unwrap_err(),
        SdkError::Overflow(SolidityType::Uint256)
    );
    assert_eq!(u(0).checked_pow(1_000_000).unwrap(), u(0));
    assert_eq!(u(1).checked_pow(1_000_000).unwrap(), u(1));
    assert_eq!(u(3).checked_pow(0).unwrap(), u(1));
}

#[test]
fn test_ordering_and_rendering() {
    assert!(u(3) < u(4));
    assert_eq!(u(1_000_000).to_string(), "1000000");
    assert_eq!(u(255).to_hex(), "0xff");
    assert_eq!(u(0).to_hex(), "0x0");
    assert_eq!(format!("{:?}", u(9)), "uint256(9)");
}

#[test]
fn test_sqrt() {
    assert_eq!(sqrt(&u(0)), u(0));
    assert_eq!(sqrt(&u(3)), u(1));
    assert_eq!(sqrt(&u(4)), u(2));
    assert_eq!(sqrt(&u(99)), u(9));
    assert_eq!(sqrt(&u(1_000_000)), u(1_000));
    assert_eq!(sqrt(&Uint256::max_value()), u(u128::MAX));
}
