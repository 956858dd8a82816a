pub mod category;
pub mod columns;
pub mod error;
pub mod stats;

pub use category::Category;
pub use columns::{FieldIndex, MissingColumns, REQUIRED_COLUMNS, RecordFields};
pub use error::{ResmapError, Result};
pub use stats::MigrationStats;
