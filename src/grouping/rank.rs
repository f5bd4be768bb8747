use std::collections::BTreeMap;

use crate::model::AggregateRecord;

/// Canonical base label -> records targeting that base.
pub type Grouping = BTreeMap<String, Vec<AggregateRecord>>;

/// Order every bucket oldest update first. `sort_by_key` is stable, so equal
/// timestamps keep their collection order.
pub fn rank(grouping: &mut Grouping) {
    for records in grouping.values_mut() {
        records.sort_by_key(|record| record.pull_request().updated_at);
    }
}

pub fn total_records(grouping: &Grouping) -> usize {
    grouping.values().map(Vec::len).sum()
}
