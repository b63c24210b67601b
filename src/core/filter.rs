use crate::models::{DateRange, ScopeSelector, WorkOrderRecord, WorkOrderTable};

/// Keep the records matching every active constraint.
///
/// - start bound: `start_datetime` date >= `range.start`
/// - end bound: `end_datetime` date <= `range.end`
/// - scope: exact match on `area` or `equipment`
///
/// Records lacking the compared field never match an active bound. An absent
/// table yields an empty one.
pub fn filter(
    table: Option<&WorkOrderTable>,
    range: &DateRange,
    scope: &ScopeSelector,
) -> WorkOrderTable {
    let Some(table) = table else {
        return WorkOrderTable::default();
    };

    if table.is_empty() {
        return table.empty_like();
    }

    let kept = table
        .records()
        .iter()
        .filter(|r| matches_range(r, range) && matches_scope(r, scope))
        .cloned()
        .collect();

    table.with_records(kept)
}

pub fn matches_range(record: &WorkOrderRecord, range: &DateRange) -> bool {
    if let Some(start) = range.start {
        match record.start_date() {
            Some(d) if d >= start => {}
            _ => return false,
        }
    }

    if let Some(end) = range.end {
        match record.end_date() {
            Some(d) if d <= end => {}
            _ => return false,
        }
    }

    true
}

pub fn matches_scope(record: &WorkOrderRecord, scope: &ScopeSelector) -> bool {
    match scope {
        ScopeSelector::All => true,
        ScopeSelector::Area(name) => record.area.as_deref() == Some(name.as_str()),
        ScopeSelector::Equipment(id) => record.equipment.as_deref() == Some(id.as_str()),
    }
}
