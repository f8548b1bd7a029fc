use stubdns_domain::Name;
use std::net::Ipv4Addr;

/// Address and TTL to put in an A record answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub address: Ipv4Addr,
    pub ttl: u32,
}

impl ResolvedAddress {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self { address, ttl }
    }
}

/// Decides what a question for `name` is answered with.
pub trait AnswerPolicy: Send + Sync {
    /// `None` produces a response with an empty answer section.
    fn resolve(&self, name: &Name) -> Option<ResolvedAddress>;
}
