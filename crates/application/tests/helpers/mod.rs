#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_policies;

pub use mock_policies::MockAnswerPolicy;

use stubdns_domain::{Header, Message, Question, RecordType};

pub fn query(id: u16, opcode: u8, name: &str) -> Message {
    let header = Header {
        id,
        opcode,
        recursion_desired: true,
        qd_count: 1,
        ..Header::default()
    };
    Message::new(header).with_question(Question::internet(name.parse().unwrap(), RecordType::A))
}
