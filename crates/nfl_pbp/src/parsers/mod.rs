pub mod clauses;
pub mod fields;
pub mod patterns;
pub mod play_parser;
pub mod play_type;

pub use clauses::*;
pub use fields::{Extract, ExtractedFields};
pub use play_parser::*;
pub use play_type::*;
