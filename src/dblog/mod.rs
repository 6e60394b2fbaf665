mod load;
mod parse;
mod severity;

pub use load::{DataSource, load_records};
pub use parse::RawRecord;
pub use severity::SEVERITY_LEVELS;
