pub mod language;
pub mod types;

pub use language::Language;
pub use types::{DraftResult, QueryType};
