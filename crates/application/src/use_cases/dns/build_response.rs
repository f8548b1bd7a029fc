use crate::ports::AnswerPolicy;
use std::sync::Arc;
use stubdns_domain::{Answer, DomainError, Header, Message, Question, RecordType};

/// Derives the response to `request` without touching it.
///
/// The response carries exactly one A/IN question copied from the request's
/// first question name and one answer per address `policy` resolves for it.
/// Header fields follow [`Header::response_to`]; QDCOUNT and ANCOUNT match
/// the sections built here.
pub fn build_response(request: &Message, policy: &dyn AnswerPolicy) -> Result<Message, DomainError> {
    let question = request.first_question().ok_or(DomainError::NoQuestion)?;
    let name = question.name.clone();

    let answers: Vec<Answer> = policy
        .resolve(&name)
        .map(|resolved| Answer::a_record(name.clone(), resolved.ttl, resolved.address))
        .into_iter()
        .collect();

    let mut header = Header::response_to(&request.header);
    header.qd_count = 1;
    header.an_count = answers.len() as u16;

    Ok(Message {
        header,
        questions: vec![Question::internet(name, RecordType::A)],
        answers,
    })
}

pub struct BuildResponseUseCase {
    policy: Arc<dyn AnswerPolicy>,
}

impl BuildResponseUseCase {
    pub fn new(policy: Arc<dyn AnswerPolicy>) -> Self {
        Self { policy }
    }

    pub fn execute(&self, request: &Message) -> Result<Message, DomainError> {
        build_response(request, self.policy.as_ref())
    }
}
