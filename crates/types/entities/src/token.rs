use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use alloy_primitives::utils::format_units;
use alloy_primitives::{Address, U256};
use eyre::{eyre, Result};

#[derive(Clone, Debug, Default)]
pub struct Token {
    chain_id: u64,
    address: Address,
    decimals: u8,
    symbol: Option<String>,
}

impl Hash for Token {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state)
    }
}

impl PartialEq for Token {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Ord for Token {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.address.cmp(&other.address)
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_symbol())
    }
}

impl Token {
    #[inline]
    pub fn new(chain_id: u64, address: Address, decimals: u8) -> Token {
        Token { chain_id, address, decimals, symbol: None }
    }

    pub fn new_with_symbol(chain_id: u64, address: Address, decimals: u8, symbol: &str) -> Token {
        Token { chain_id, address, decimals, symbol: Some(symbol.to_string()) }
    }

    #[inline]
    pub fn get_chain_id(&self) -> u64 {
        self.chain_id
    }

    #[inline]
    pub fn get_address(&self) -> Address {
        self.address
    }

    #[inline]
    pub fn get_decimals(&self) -> u8 {
        self.decimals
    }

    #[inline]
    pub fn get_symbol(&self) -> String {
        self.symbol.clone().unwrap_or(self.address.to_string())
    }

    /// Whether this token is token0 of a pool it forms with `other`.
    pub fn sorts_before(&self, other: &Token) -> Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(eyre!("CHAIN_IDS"));
        }
        if self.address == other.address {
            return Err(eyre!("ADDRESSES"));
        }
        Ok(self.address < other.address)
    }

    /// Orders an unordered pair into (token0, token1).
    pub fn sort_pair(a: Token, b: Token) -> Result<(Token, Token)> {
        if a.sorts_before(&b)? {
            Ok((a, b))
        } else {
            Ok((b, a))
        }
    }

    /// Raw amount rendered with the token's decimals.
    pub fn format_amount(&self, value: U256) -> String {
        format_units(value, self.decimals).unwrap_or_else(|_| value.to_string())
    }
}
