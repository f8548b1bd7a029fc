pub mod answer_policy;
pub mod codec;
pub mod server;
pub mod wire;

pub use answer_policy::StaticAnswerPolicy;
pub use codec::{decode_message, encode_message};
pub use server::DnsServerHandler;
