use std::fmt;

/// Chain a script expects to talk to. The node must report the same chain id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkIdentity {
    pub name: String,
    pub chain_id: u64,
}

impl NetworkIdentity {
    pub fn new(name: impl Into<String>, chain_id: u64) -> Self {
        Self { name: name.into(), chain_id }
    }

    #[inline]
    pub fn matches(&self, reported_chain_id: u64) -> bool {
        self.chain_id == reported_chain_id
    }
}

impl fmt::Display for NetworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.chain_id)
    }
}
