use super::header::{decode_header, encode_header};
use super::record::{decode_answer, decode_question, encode_answer, encode_question};
use crate::dns::wire::{WireReader, WireWriter};
use bytes::Bytes;
use stubdns_domain::{DomainError, Message};

// Root name plus fixed fields: smallest possible wire size of each record.
const MIN_QUESTION_LEN: usize = 1 + 4;
const MIN_ANSWER_LEN: usize = 1 + 10;

/// Decodes the header, QDCOUNT questions and ANCOUNT answers.
///
/// Anything after the answer section (authority and additional records,
/// such as an EDNS0 OPT) is left unread; the header keeps NSCOUNT and
/// ARCOUNT as received.
pub fn decode_message(buf: &[u8]) -> Result<Message, DomainError> {
    let mut reader = WireReader::new(buf);
    let header = decode_header(&mut reader)?;

    let qd_count = header.qd_count as usize;
    let mut questions = Vec::with_capacity(qd_count.min(reader.remaining() / MIN_QUESTION_LEN));
    for _ in 0..qd_count {
        questions.push(decode_question(&mut reader)?);
    }

    let an_count = header.an_count as usize;
    let mut answers = Vec::with_capacity(an_count.min(reader.remaining() / MIN_ANSWER_LEN));
    for _ in 0..an_count {
        answers.push(decode_answer(&mut reader)?);
    }

    Ok(Message {
        header,
        questions,
        answers,
    })
}

/// Encodes `message` into a fresh buffer.
///
/// QDCOUNT and ANCOUNT are recomputed from the sections; NSCOUNT and ARCOUNT
/// are written as zero since those sections are never carried.
pub fn encode_message(message: &Message) -> Result<Bytes, DomainError> {
    let mut header = message.header;
    header.qd_count = section_count(message.questions.len())?;
    header.an_count = section_count(message.answers.len())?;
    header.ns_count = 0;
    header.ar_count = 0;

    let mut writer = WireWriter::new();
    encode_header(&header, &mut writer);
    for question in &message.questions {
        encode_question(question, &mut writer)?;
    }
    for answer in &message.answers {
        encode_answer(answer, &mut writer)?;
    }

    Ok(writer.into_bytes())
}

fn section_count(len: usize) -> Result<u16, DomainError> {
    u16::try_from(len).map_err(|_| DomainError::TooManyRecords(len))
}
