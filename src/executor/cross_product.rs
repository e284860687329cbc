//! Cross product operator.

use crate::error::QueryResult;
use crate::relation::{Relation, Row};

/// Cartesian product of two relations.
///
/// The result header is the left header followed by the right header, with
/// no de-duplication (names may collide). The left row varies slowest: for
/// each left row, one combined row is emitted per right row.
pub fn cross_product(left: &Relation, right: &Relation) -> QueryResult<Relation> {
    let mut attributes = left.attributes().to_vec();
    attributes.extend_from_slice(right.attributes());

    let mut rows: Vec<Row> = Vec::with_capacity(left.row_count() * right.row_count());
    for left_row in left.rows() {
        for right_row in right.rows() {
            let mut combined = left_row.clone();
            combined.extend_from_slice(right_row);
            rows.push(combined);
        }
    }

    Relation::new(attributes, rows)
}
