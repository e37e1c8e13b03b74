//! I2C address definitions for the BMI3 family.

/// BMI3 I2C addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmi3Address {
    /// Primary address: 0x68 (SDO = low).
    Primary,
    /// Secondary address: 0x69 (SDO = high).
    Secondary,
}

impl Bmi3Address {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Primary => 0x68,
            Self::Secondary => 0x69,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        assert_eq!(Bmi3Address::Primary.addr(), 0x68);
        assert_eq!(Bmi3Address::Secondary.addr(), 0x69);
    }
}
