//! Selection operator.
//!
//! Keeps the rows of the source relation that satisfy the condition. The
//! attribute header is unchanged and row order is preserved.

use crate::error::{QueryError, QueryResult};
use crate::query::{CompareOp, Condition, Predicate};
use crate::relation::Relation;

/// Filter `source` by `condition`.
///
/// All predicates must hold for a row to be kept, regardless of whether
/// the condition was written with `AND` or `OR`. The recorded combinator
/// is deliberately ignored; see `Condition`.
pub fn select(source: &Relation, condition: &Condition) -> QueryResult<Relation> {
    // Resolve every attribute up front so an unknown attribute fails even
    // on an empty relation.
    let columns: Vec<usize> = condition
        .predicates
        .iter()
        .map(|p| source.column_index(&p.attribute))
        .collect::<QueryResult<_>>()?;

    let mut rows = Vec::new();
    for row in source.rows() {
        let mut keep = true;
        for (predicate, &column) in condition.predicates.iter().zip(&columns) {
            if !matches(&row[column], predicate)? {
                keep = false;
                break;
            }
        }
        if keep {
            rows.push(row.clone());
        }
    }

    Relation::new(source.attributes().to_vec(), rows)
}

fn matches(value: &str, predicate: &Predicate) -> QueryResult<bool> {
    match predicate.op {
        CompareOp::Greater => Ok(as_number(value)? > as_number(&predicate.literal)?),
        CompareOp::Less => Ok(as_number(value)? < as_number(&predicate.literal)?),
        CompareOp::Equal => Ok(value == predicate.literal),
    }
}

fn as_number(value: &str) -> QueryResult<f64> {
    value
        .parse()
        .map_err(|_| QueryError::TypeMismatch(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::test_support::relation;
    use crate::query::parse_condition;

    fn emp() -> Relation {
        relation(
            &["id", "name", "salary"],
            &[&["1", "Al", "50"], &["2", "Bo", "90"], &["3", "Cy", "70"]],
        )
    }

    #[test]
    fn test_numeric_greater_than() {
        let result = select(&emp(), &parse_condition("salary > '60'").unwrap()).unwrap();
        assert_eq!(result.attributes(), &["id", "name", "salary"]);
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.rows()[0][1], "Bo");
        assert_eq!(result.rows()[1][1], "Cy");
    }

    #[test]
    fn test_textual_equality() {
        let result = select(&emp(), &parse_condition("name = 'Al'").unwrap()).unwrap();
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.rows()[0][0], "1");
    }

    #[test]
    fn test_selection_is_a_filter() {
        let source = emp();
        let condition = parse_condition("salary < '80'").unwrap();
        let result = select(&source, &condition).unwrap();

        assert!(result.row_count() <= source.row_count());
        for row in result.rows() {
            assert!(row[2].parse::<f64>().unwrap() < 80.0);
        }
    }

    #[test]
    fn test_or_combinator_still_requires_all_predicates() {
        // Established language behavior: OR parses but evaluates as AND.
        let condition = parse_condition("salary > '60' OR name = 'Al'").unwrap();
        let result = select(&emp(), &condition).unwrap();
        assert_eq!(result.row_count(), 0);
    }

    #[test]
    fn test_and_condition() {
        let condition = parse_condition("salary > '60' AND name = 'Cy'").unwrap();
        let result = select(&emp(), &condition).unwrap();
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.rows()[0][1], "Cy");
    }

    #[test]
    fn test_unknown_attribute() {
        let err = select(&emp(), &parse_condition("wage > '60'").unwrap()).unwrap_err();
        assert!(matches!(err, QueryError::UnknownAttribute { .. }));
    }

    #[test]
    fn test_unknown_attribute_fails_on_empty_relation_too() {
        let empty = relation(&["id"], &[]);
        let err = select(&empty, &parse_condition("wage > '60'").unwrap()).unwrap_err();
        assert!(matches!(err, QueryError::UnknownAttribute { .. }));
    }

    #[test]
    fn test_non_numeric_comparison_is_a_type_mismatch() {
        let err = select(&emp(), &parse_condition("name > '60'").unwrap()).unwrap_err();
        assert!(matches!(err, QueryError::TypeMismatch(value) if value == "Al"));
    }

    #[test]
    fn test_empty_result_keeps_header() {
        let result = select(&emp(), &parse_condition("salary > '999'").unwrap()).unwrap();
        assert_eq!(result.attributes(), &["id", "name", "salary"]);
        assert_eq!(result.row_count(), 0);
    }
}
