#![allow(dead_code)]

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use stubdns_application::ports::{AnswerPolicy, ResolvedAddress};
use stubdns_domain::Name;

/// Answers from a per-name table; unknown names get no answer.
#[derive(Clone, Default)]
pub struct MockAnswerPolicy {
    answers: Arc<RwLock<HashMap<Name, ResolvedAddress>>>,
    calls: Arc<AtomicUsize>,
}

impl MockAnswerPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(self, name: &str, address: Ipv4Addr, ttl: u32) -> Self {
        self.answers
            .write()
            .unwrap()
            .insert(name.parse().unwrap(), ResolvedAddress::new(address, ttl));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl AnswerPolicy for MockAnswerPolicy {
    fn resolve(&self, name: &Name) -> Option<ResolvedAddress> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.answers.read().unwrap().get(name).copied()
    }
}
