use super::{RecordType, CLASS_IN};
use crate::Name;

/// Question section entry: QNAME, QTYPE, QCLASS.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: Name,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: Name, qtype: u16, qclass: u16) -> Self {
        Self {
            name,
            qtype,
            qclass,
        }
    }

    /// An `IN`-class question for `record_type`.
    pub fn internet(name: Name, record_type: RecordType) -> Self {
        Self::new(name, record_type.to_u16(), CLASS_IN)
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}
