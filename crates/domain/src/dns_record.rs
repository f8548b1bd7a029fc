mod answer;
mod question;
mod record_type;

pub use answer::Answer;
pub use question::Question;
pub use record_type::RecordType;

/// Internet class.
pub const CLASS_IN: u16 = 1;
