mod builders;

pub use builders::WireBuilder;
