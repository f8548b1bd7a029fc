use super::name::{decode_name, encode_name};
use crate::dns::wire::{WireReader, WireWriter};
use stubdns_domain::{Answer, DomainError, Question};

pub fn decode_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
    let name = decode_name(reader)?;
    reader.ensure(4)?;
    let qtype = reader.read_u16()?;
    let qclass = reader.read_u16()?;

    Ok(Question {
        name,
        qtype,
        qclass,
    })
}

pub fn encode_question(question: &Question, writer: &mut WireWriter) -> Result<(), DomainError> {
    encode_name(&question.name, writer)?;
    writer.put_u16(question.qtype);
    writer.put_u16(question.qclass);
    Ok(())
}

/// Reads a resource record. RDATA is taken verbatim: exactly RDLENGTH bytes,
/// or [`DomainError::TruncatedInput`] if the message ends first.
pub fn decode_answer(reader: &mut WireReader<'_>) -> Result<Answer, DomainError> {
    let name = decode_name(reader)?;
    reader.ensure(10)?;
    let rtype = reader.read_u16()?;
    let rclass = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()?;
    let rdata = reader.take(rdlength as usize)?.to_vec();

    Ok(Answer {
        name,
        rtype,
        rclass,
        ttl,
        rdlength,
        rdata,
    })
}

/// Writes a resource record. RDLENGTH is written as stored and must match
/// the RDATA length; nothing is written when it doesn't.
pub fn encode_answer(answer: &Answer, writer: &mut WireWriter) -> Result<(), DomainError> {
    if answer.rdata.len() != answer.rdlength as usize {
        return Err(DomainError::RDataLengthMismatch {
            declared: answer.rdlength,
            actual: answer.rdata.len(),
        });
    }

    encode_name(&answer.name, writer)?;
    writer.put_u16(answer.rtype);
    writer.put_u16(answer.rclass);
    writer.put_u32(answer.ttl);
    writer.put_u16(answer.rdlength);
    writer.put_slice(&answer.rdata);
    Ok(())
}
