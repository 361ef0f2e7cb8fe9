use cucumber::gherkin::Step;

use copydesk::types::{FixtureRow, MetaEntry};

/// Convert a step's data table into fixture rows, using the first table row
/// as the column header.
pub fn rows_from_table(step: &Step) -> Vec<FixtureRow> {
    let Some(table) = step.table.as_ref() else {
        return Vec::new();
    };
    let Some((header, body)) = table.rows.split_first() else {
        return Vec::new();
    };
    body.iter()
        .map(|row| {
            FixtureRow::from_pairs(
                header
                    .iter()
                    .zip(row.iter())
                    .map(|(k, v)| (k.clone(), v.clone())),
            )
        })
        .collect()
}

/// Convert a key/value data table into metadata entries.
pub fn meta_from_table(step: &Step) -> Vec<MetaEntry> {
    rows_from_table(step)
        .into_iter()
        .filter_map(|row| {
            let key = row.get("key")?.to_string();
            let value = row.get("value")?.to_string();
            Some(MetaEntry { key, value })
        })
        .collect()
}
