use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use alloy_primitives::Address;

use crate::FeeAmount;

#[derive(Clone, Debug)]
pub struct SwapDirection {
    token_from: Address,
    token_to: Address,
}

impl SwapDirection {
    #[inline]
    pub fn new(token_from: Address, token_to: Address) -> Self {
        Self { token_from, token_to }
    }

    #[inline]
    pub fn from(&self) -> &Address {
        &self.token_from
    }
    #[inline]
    pub fn to(&self) -> &Address {
        &self.token_to
    }
}

impl Hash for SwapDirection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token_from.hash(state);
        self.token_to.hash(state);
    }
}

impl PartialEq for SwapDirection {
    fn eq(&self, other: &Self) -> bool {
        self.token_from.eq(&other.token_from) && self.token_to.eq(&other.token_to)
    }
}

impl Eq for SwapDirection {}

/// Single pool hop with an ordered input and output token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapRoute {
    pub pool: Address,
    pub fee: FeeAmount,
    pub direction: SwapDirection,
}

impl SwapRoute {
    pub fn new(pool: Address, fee: FeeAmount, direction: SwapDirection) -> Self {
        Self { pool, fee, direction }
    }

    #[inline]
    pub fn token_in(&self) -> Address {
        *self.direction.from()
    }

    #[inline]
    pub fn token_out(&self) -> Address {
        *self.direction.to()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_route_tokens() {
        let weth = address!("4200000000000000000000000000000000000006");
        let syn = address!("4A679253410272dd5232B3Ff7cF5dbB88f295319");

        let direction = SwapDirection::new(syn, weth);
        assert_ne!(direction, SwapDirection::new(weth, syn));

        let route = SwapRoute::new(Address::repeat_byte(1), FeeAmount::Low, direction);
        assert_eq!(route.token_in(), syn);
        assert_eq!(route.token_out(), weth);

        let direction = SwapDirection::new(weth, syn);
        let route = SwapRoute::new(Address::repeat_byte(1), FeeAmount::Low, direction);
        assert_eq!(route.token_in(), weth);
        assert_eq!(route.token_out(), syn);
    }
}
