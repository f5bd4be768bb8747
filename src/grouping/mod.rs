mod normalizer;
mod rank;
mod summary;

pub use normalizer::AliasTable;
pub use rank::{rank, total_records, Grouping};
pub use summary::{summarize, ReviewActivity};
