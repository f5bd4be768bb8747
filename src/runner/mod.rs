mod collector;
mod enumerator;

pub use collector::{collect_by_base, CollectOptions};
pub use enumerator::enumerate_repositories;
