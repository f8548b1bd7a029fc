use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Malformed domain name: {0}")]
    MalformedName(String),

    #[error("Label too long: {0} bytes (max 63)")]
    LabelTooLong(usize),

    #[error("Empty label in domain name")]
    EmptyLabel,

    #[error("Domain name too long: {0} bytes encoded (max 255)")]
    NameTooLong(usize),

    #[error("RDATA length mismatch: RDLENGTH is {declared}, RDATA is {actual} bytes")]
    RDataLengthMismatch { declared: u16, actual: usize },

    #[error("Too many records for a 16-bit section count: {0}")]
    TooManyRecords(usize),

    #[error("Message has no question to answer")]
    NoQuestion,

    #[error("Message is a response (QR=1), not a query")]
    NotAQuery,
}
