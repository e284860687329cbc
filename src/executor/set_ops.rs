//! Union and difference operators.
//!
//! Both treat rows as set members: duplicates are removed and result row
//! order is unspecified (the de-duplication pass goes through a hash set).
//! Tests and callers must compare these results as sets, not sequences.

use crate::error::{QueryError, QueryResult};
use crate::relation::{Relation, Row};
use std::collections::HashSet;

/// Set union of two relations' rows.
///
/// Fails with `SchemaMismatch` unless the attribute sequences are
/// identical (same names, same order).
pub fn union(left: &Relation, right: &Relation) -> QueryResult<Relation> {
    if left.attributes() != right.attributes() {
        return Err(QueryError::SchemaMismatch(format!(
            "union requires identical attributes, got {:?} and {:?}",
            left.attributes(),
            right.attributes()
        )));
    }

    let mut seen: HashSet<&Row> = HashSet::new();
    let mut rows = Vec::new();
    for row in left.rows().iter().chain(right.rows()) {
        if seen.insert(row) {
            rows.push(row.clone());
        }
    }

    Relation::new(left.attributes().to_vec(), rows)
}

/// Rows present in `left` but absent from `right`, by whole-row equality.
///
/// Only the column counts must agree, matching the language's looser rule
/// for difference. The left header is kept even when no rows survive, and
/// duplicate left rows collapse to one.
pub fn difference(left: &Relation, right: &Relation) -> QueryResult<Relation> {
    if left.arity() != right.arity() {
        return Err(QueryError::SchemaMismatch(format!(
            "difference requires the same column count, got {} and {}",
            left.arity(),
            right.arity()
        )));
    }

    let excluded: HashSet<&Row> = right.rows().iter().collect();
    let mut seen: HashSet<&Row> = HashSet::new();
    let mut rows = Vec::new();
    for row in left.rows() {
        if !excluded.contains(row) && seen.insert(row) {
            rows.push(row.clone());
        }
    }

    Relation::new(left.attributes().to_vec(), rows)
}
