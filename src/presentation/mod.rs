/// Output formats of an export
pub mod format;
/// Flattened rating records
pub mod rating;

pub use format::ExportFormat;
pub use rating::Rating;
