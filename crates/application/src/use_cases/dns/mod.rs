mod build_response;

pub use build_response::{build_response, BuildResponseUseCase};
