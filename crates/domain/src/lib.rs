//! stubdns domain layer: DNS wire value types, errors and configuration.
pub mod config;
pub mod dns_header;
pub mod dns_message;
pub mod dns_name;
pub mod dns_record;
pub mod errors;
pub mod response_code;

pub use config::{AnswerConfig, CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig};
pub use dns_header::{Header, OPCODE_IQUERY, OPCODE_QUERY, OPCODE_STATUS};
pub use dns_message::Message;
pub use dns_name::Name;
pub use dns_record::{Answer, Question, RecordType, CLASS_IN};
pub use errors::DomainError;
pub use response_code::ResponseCode;
