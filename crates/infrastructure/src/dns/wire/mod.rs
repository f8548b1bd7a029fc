//! Bounds-checked cursor over DNS wire data.
//!
//! Every codec function reads through a [`WireReader`] and writes through a
//! [`WireWriter`]; neither indexes raw slices directly.
mod reader;
mod writer;

pub use reader::WireReader;
pub use writer::WireWriter;
