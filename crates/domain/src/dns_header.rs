use crate::ResponseCode;

/// Standard query.
pub const OPCODE_QUERY: u8 = 0;
/// Inverse query (obsolete, RFC 3425).
pub const OPCODE_IQUERY: u8 = 1;
/// Server status request.
pub const OPCODE_STATUS: u8 = 2;

const OPCODE_MASK: u8 = 0x0F;
const Z_MASK: u8 = 0x07;
const RCODE_MASK: u8 = 0x0F;

/// Fixed 12-byte DNS message header (RFC 1035 §4.1.1).
///
/// `opcode`, `z` and `rcode` are narrower than `u8` on the wire (4, 3 and 4
/// bits). Packing masks them to their field width: out-of-range values are
/// truncated silently, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    /// QR bit: `false` for a query, `true` for a response.
    pub response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// Reserved bits, carried through as given.
    pub z: u8,
    pub rcode: u8,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    pub const LEN: usize = 12;

    /// Packs the flag fields into the second 16-bit word of the header.
    ///
    /// Layout: bit15=QR, bits14-11=OPCODE, bit10=AA, bit9=TC, bit8=RD,
    /// bit7=RA, bits6-4=Z, bits3-0=RCODE.
    pub fn flags(&self) -> u16 {
        (self.response as u16) << 15
            | ((self.opcode & OPCODE_MASK) as u16) << 11
            | (self.authoritative as u16) << 10
            | (self.truncated as u16) << 9
            | (self.recursion_desired as u16) << 8
            | (self.recursion_available as u16) << 7
            | ((self.z & Z_MASK) as u16) << 4
            | (self.rcode & RCODE_MASK) as u16
    }

    /// Unpacks a flags word produced by [`Header::flags`].
    pub fn set_flags(&mut self, flags: u16) {
        self.response = flags & 0x8000 != 0;
        self.opcode = ((flags >> 11) as u8) & OPCODE_MASK;
        self.authoritative = flags & 0x0400 != 0;
        self.truncated = flags & 0x0200 != 0;
        self.recursion_desired = flags & 0x0100 != 0;
        self.recursion_available = flags & 0x0080 != 0;
        self.z = ((flags >> 4) as u8) & Z_MASK;
        self.rcode = (flags as u8) & RCODE_MASK;
    }

    /// Derives the header of a response to `request`.
    ///
    /// ID, OPCODE and RD are mirrored. RCODE is NOERROR for a standard query
    /// and NOTIMP for every other opcode. Section counts start at zero and
    /// are filled in when the message is encoded.
    pub fn response_to(request: &Header) -> Header {
        let rcode = if request.opcode == OPCODE_QUERY {
            ResponseCode::NoError
        } else {
            ResponseCode::NotImp
        };

        Header {
            id: request.id,
            response: true,
            opcode: request.opcode & OPCODE_MASK,
            recursion_desired: request.recursion_desired,
            rcode: rcode.to_u8(),
            ..Header::default()
        }
    }

    pub fn response_code(&self) -> Option<ResponseCode> {
        ResponseCode::from_u8(self.rcode)
    }
}
