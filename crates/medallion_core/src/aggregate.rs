use std::collections::BTreeMap;

use crate::enrich::REGION_COLUMN;
use crate::table::{Table, TableError};

pub const CUSTOMER_ID_COLUMN: &str = "Customer Id";
pub const CUSTOMER_COUNT_COLUMN: &str = "Customer_Count";
pub const CUSTOMER_IDS_COLUMN: &str = "Customer_IDs";

struct RegionGroup {
    row_count: usize,
    customer_ids: Vec<String>,
}

/// Silver to gold transform: groups rows by exact `Region` value and emits
/// one summary row per region in ascending lexicographic order, with the
/// group's row count and a ", "-joined list of customer ids in original row
/// order. Zero input rows yield zero groups.
pub fn aggregate(table: &Table) -> Result<Table, TableError> {
    let region_index = table.column(REGION_COLUMN)?;
    let customer_index = table.column(CUSTOMER_ID_COLUMN)?;

    let mut groups: BTreeMap<String, RegionGroup> = BTreeMap::new();
    for row in table.rows() {
        let group = groups
            .entry(row[region_index].clone())
            .or_insert_with(|| RegionGroup {
                row_count: 0,
                customer_ids: Vec::new(),
            });
        group.row_count += 1;
        group.customer_ids.push(row[customer_index].clone());
    }

    let mut summary = Table::new(vec![
        REGION_COLUMN.to_string(),
        CUSTOMER_COUNT_COLUMN.to_string(),
        CUSTOMER_IDS_COLUMN.to_string(),
    ]);
    for (region, group) in groups {
        summary.push_row(vec![
            region,
            group.row_count.to_string(),
            group.customer_ids.join(", "),
        ]);
    }

    Ok(summary)
}
