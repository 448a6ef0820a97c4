pub mod find;
pub mod grep;
