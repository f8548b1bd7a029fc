//! RFC 1035 §4 message codec.
//!
//! Decoding is all-or-nothing: the first malformed field aborts the whole
//! message, since a wrong offset would corrupt every record after it.
//! Encoding validates each record before writing it and likewise never hands
//! back a partial buffer.
mod header;
mod message;
mod name;
mod record;

pub use header::{decode_header, encode_header};
pub use message::{decode_message, encode_message};
pub use name::{decode_name, decode_name_at, encode_name};
pub use record::{decode_answer, decode_question, encode_answer, encode_question};
