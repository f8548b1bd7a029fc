#![allow(dead_code)]

/// Hand-assembled wire bytes, independent of the codec under test.
pub struct WireBuilder {
    buf: Vec<u8>,
}

impl WireBuilder {
    pub fn header(id: u16, flags: u16, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        let mut buf = Vec::with_capacity(64);
        for word in [id, flags, qd, an, ns, ar] {
            buf.extend_from_slice(&word.to_be_bytes());
        }
        Self { buf }
    }

    /// Standard query with RD set and one question.
    pub fn query(id: u16) -> Self {
        Self::header(id, 0x0100, 1, 0, 0, 0)
    }

    pub fn name(mut self, dotted: &str) -> Self {
        for label in dotted.split('.').filter(|l| !l.is_empty()) {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.buf.push(0x00);
        self
    }

    pub fn question(self, dotted: &str, qtype: u16, qclass: u16) -> Self {
        self.name(dotted).u16(qtype).u16(qclass)
    }

    pub fn a_record(self, dotted: &str, ttl: u32, ip: [u8; 4]) -> Self {
        self.name(dotted)
            .u16(1)
            .u16(1)
            .u32(ttl)
            .u16(4)
            .bytes(&ip)
    }

    /// EDNS0 OPT pseudo-record as `dig` appends it.
    pub fn opt_record(self) -> Self {
        self.bytes(&[0x00, 0x00, 0x29, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00])
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}
