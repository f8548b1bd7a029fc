use crate::dns::wire::{WireReader, WireWriter};
use stubdns_domain::{DomainError, Name};

const POINTER_MASK: u8 = 0xC0;

/// Reads an uncompressed name: length-prefixed labels up to a zero byte.
///
/// Length bytes with either of the top two bits set are compression pointers
/// (`11`) or reserved label types (`01`, `10`) and fail with
/// [`DomainError::MalformedName`], as do a truncated label, a missing
/// terminator and a name longer than 255 bytes.
pub fn decode_name(reader: &mut WireReader<'_>) -> Result<Name, DomainError> {
    let mut name = Name::root();
    let mut encoded_len = 1;

    loop {
        let offset = reader.position();
        let len = reader.read_u8().map_err(|_| {
            DomainError::MalformedName(format!("missing terminating zero label at offset {}", offset))
        })?;

        if len == 0 {
            return Ok(name);
        }

        match len & POINTER_MASK {
            0 => {}
            POINTER_MASK => {
                return Err(DomainError::MalformedName(format!(
                    "compression pointer 0x{:02X} at offset {} is not supported",
                    len, offset
                )));
            }
            _ => {
                return Err(DomainError::MalformedName(format!(
                    "reserved label type 0x{:02X} at offset {}",
                    len, offset
                )));
            }
        }

        let len = len as usize;
        encoded_len += 1 + len;
        if encoded_len > Name::MAX_ENCODED_LEN {
            return Err(DomainError::MalformedName(format!(
                "name exceeds {} bytes",
                Name::MAX_ENCODED_LEN
            )));
        }

        let label = reader.take(len).map_err(|_| {
            DomainError::MalformedName(format!(
                "label of {} bytes at offset {} runs past the end of the message",
                len, offset
            ))
        })?;
        name.push_label(label);
    }
}

/// Slice-and-offset form of [`decode_name`]: returns the name and the offset
/// just past its terminator.
pub fn decode_name_at(buf: &[u8], offset: usize) -> Result<(Name, usize), DomainError> {
    let mut reader = WireReader::at(buf, offset);
    let name = decode_name(&mut reader)?;
    Ok((name, reader.position()))
}

/// Writes `name` uncompressed. The name is validated before any byte is
/// written.
pub fn encode_name(name: &Name, writer: &mut WireWriter) -> Result<(), DomainError> {
    name.validate()?;

    for label in name.labels() {
        writer.put_u8(label.len() as u8);
        writer.put_slice(label);
    }
    writer.put_u8(0);
    Ok(())
}
