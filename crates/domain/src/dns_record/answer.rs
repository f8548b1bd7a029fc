use super::{RecordType, CLASS_IN};
use crate::Name;
use std::net::Ipv4Addr;

/// Answer section resource record.
///
/// `rdlength` is kept as its own field so a decoded record reproduces the
/// wire exactly. Encoding rejects a record whose `rdlength` disagrees with
/// `rdata.len()`; [`Answer::new`] and [`Answer::a_record`] derive it from the
/// data so callers using them cannot build such a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer {
    pub name: Name,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: Vec<u8>,
}

impl Answer {
    pub fn new(name: Name, rtype: u16, rclass: u16, ttl: u32, rdata: Vec<u8>) -> Self {
        Self {
            name,
            rtype,
            rclass,
            ttl,
            rdlength: rdata.len() as u16,
            rdata,
        }
    }

    pub fn a_record(name: Name, ttl: u32, address: Ipv4Addr) -> Self {
        Self::new(
            name,
            RecordType::A.to_u16(),
            CLASS_IN,
            ttl,
            address.octets().to_vec(),
        )
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    /// The IPv4 address carried by an A record, if this is one.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.rtype != RecordType::A.to_u16() {
            return None;
        }
        let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }
}
