pub mod auxiliary;
pub mod entry;
pub mod report;
