mod answer_policy;

pub use answer_policy::{AnswerPolicy, ResolvedAddress};
