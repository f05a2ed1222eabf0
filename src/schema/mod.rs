pub mod header;
pub mod types;

pub use header::ColumnMap;
pub use types::Field;
