//! Domain Entities

pub mod content_record;

pub use content_record::ContentRecord;
