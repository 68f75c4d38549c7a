use std::str::FromStr;

use alloy_primitives::aliases::U24;
use strum_macros::{Display, EnumIter, EnumString, VariantNames};

/// Pool fee tiers in hundredths of a basis point.
#[derive(Copy, Clone, Debug, PartialEq, Hash, Eq, EnumString, VariantNames, Display, Default, EnumIter)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum FeeAmount {
    Lowest = 100,
    #[default]
    Low = 500,
    Medium = 3000,
    High = 10000,
}

impl FeeAmount {
    /// Resolves a CLI selector. Anything unrecognised falls back to [`FeeAmount::Low`].
    pub fn from_selector(selector: &str) -> Self {
        Self::from_str(selector.trim()).unwrap_or_default()
    }

    #[inline]
    pub fn fee(&self) -> u32 {
        *self as u32
    }

    #[inline]
    pub fn as_u24(&self) -> U24 {
        U24::from(self.fee())
    }

    #[inline]
    pub fn tick_spacing(&self) -> i32 {
        match self {
            FeeAmount::Lowest => 1,
            FeeAmount::Low => 10,
            FeeAmount::Medium => 60,
            FeeAmount::High => 200,
        }
    }
}
