pub mod dns;

pub use dns::{build_response, BuildResponseUseCase};
