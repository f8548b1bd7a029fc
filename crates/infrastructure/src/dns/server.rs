use crate::dns::codec::{decode_message, encode_message};
use bytes::Bytes;
use std::sync::Arc;
use stubdns_application::use_cases::BuildResponseUseCase;
use stubdns_domain::{DomainError, RecordType};
use tracing::{debug, warn};

/// Turns one request datagram into one response datagram.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<BuildResponseUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<BuildResponseUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the encoded response, or `None` when the datagram has to be
    /// dropped. Every failure is logged here so the caller only sends.
    /// Responses (QR=1) are never answered.
    pub fn handle_datagram(&self, datagram: &[u8]) -> Option<Bytes> {
        match self.try_handle(datagram) {
            Ok(wire) => Some(wire),
            Err(DomainError::NotAQuery) => {
                debug!(len = datagram.len(), "Ignoring DNS response datagram");
                None
            }
            Err(e) => {
                warn!(error = %e, len = datagram.len(), "Dropping DNS datagram");
                None
            }
        }
    }

    pub fn try_handle(&self, datagram: &[u8]) -> Result<Bytes, DomainError> {
        let request = decode_message(datagram)?;
        if request.header.response {
            return Err(DomainError::NotAQuery);
        }
        let response = self.use_case.execute(&request)?;
        let wire = encode_message(&response)?;

        if let Some(question) = request.first_question() {
            let rcode = response
                .header
                .response_code()
                .map_or("UNKNOWN", |code| code.as_str());
            debug!(
                id = request.header.id,
                name = %question.name,
                qtype = %describe_type(question.qtype),
                rcode,
                answers = response.answers.len(),
                "Answered DNS query"
            );
        }

        Ok(wire)
    }
}

fn describe_type(code: u16) -> String {
    RecordType::from_u16(code)
        .map(|t| t.to_string())
        .unwrap_or_else(|| code.to_string())
}
