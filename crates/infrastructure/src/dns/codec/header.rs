use crate::dns::wire::{WireReader, WireWriter};
use stubdns_domain::{DomainError, Header};

/// Reads the 12-byte header. Nothing is consumed when fewer than 12 bytes
/// remain.
pub fn decode_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
    reader.ensure(Header::LEN)?;

    let mut header = Header {
        id: reader.read_u16()?,
        ..Header::default()
    };
    header.set_flags(reader.read_u16()?);
    header.qd_count = reader.read_u16()?;
    header.an_count = reader.read_u16()?;
    header.ns_count = reader.read_u16()?;
    header.ar_count = reader.read_u16()?;

    Ok(header)
}

/// Writes the 12-byte header. OPCODE, Z and RCODE are masked to their field
/// widths.
pub fn encode_header(header: &Header, writer: &mut WireWriter) {
    writer.put_u16(header.id);
    writer.put_u16(header.flags());
    writer.put_u16(header.qd_count);
    writer.put_u16(header.an_count);
    writer.put_u16(header.ns_count);
    writer.put_u16(header.ar_count);
}
