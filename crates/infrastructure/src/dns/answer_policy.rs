use std::net::Ipv4Addr;
use stubdns_application::ports::{AnswerPolicy, ResolvedAddress};
use stubdns_domain::{AnswerConfig, Name};

/// Answers every name with the same address and TTL.
#[derive(Debug, Clone, Copy)]
pub struct StaticAnswerPolicy {
    resolved: ResolvedAddress,
}

impl StaticAnswerPolicy {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            resolved: ResolvedAddress::new(address, ttl),
        }
    }

    pub fn from_config(config: &AnswerConfig) -> Self {
        Self::new(config.address, config.ttl)
    }
}

impl AnswerPolicy for StaticAnswerPolicy {
    fn resolve(&self, _name: &Name) -> Option<ResolvedAddress> {
        Some(self.resolved)
    }
}
