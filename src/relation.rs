//! In-memory relation data model.
//!
//! A relation is an ordered attribute header plus a sequence of rows of
//! text values. All values are text; numeric comparison happens on demand
//! in the evaluator. A relation with zero rows is valid and keeps its
//! header, which is how empty results carry their schema to the report.

use crate::error::{QueryError, QueryResult};

/// One row of a relation. Equality is element-wise, which makes a row the
/// unit of set membership for union and difference.
pub type Row = Vec<String>;

/// A named table's contents: attribute header plus data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    attributes: Vec<String>,
    rows: Vec<Row>,
}

impl Relation {
    /// Create a relation, checking that every row's arity matches the
    /// attribute count.
    pub fn new(attributes: Vec<String>, rows: Vec<Row>) -> QueryResult<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != attributes.len() {
                return Err(QueryError::ArityError(format!(
                    "row {} has {} values but the relation has {} attributes",
                    i,
                    row.len(),
                    attributes.len()
                )));
            }
        }
        Ok(Relation { attributes, rows })
    }

    /// A relation with no attributes and no rows. Used as the result of a
    /// no-op query line.
    pub fn empty() -> Self {
        Relation {
            attributes: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of attributes (columns).
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve an attribute name to its column index by scanning the
    /// header. Names are case-sensitive.
    pub fn column_index(&self, attribute: &str) -> QueryResult<usize> {
        self.attributes
            .iter()
            .position(|a| a == attribute)
            .ok_or_else(|| QueryError::UnknownAttribute {
                attribute: attribute.to_string(),
                attributes: self.attributes.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_checks_row_arity() {
        let result = Relation::new(
            owned(&["id", "name"]),
            vec![owned(&["1", "Al"]), owned(&["2"])],
        );
        assert!(matches!(result, Err(QueryError::ArityError(_))));
    }

    #[test]
    fn test_zero_row_relation_keeps_header() {
        let relation = Relation::new(owned(&["id", "name"]), vec![]).unwrap();
        assert_eq!(relation.attributes(), &["id", "name"]);
        assert_eq!(relation.row_count(), 0);
    }

    #[test]
    fn test_column_index() {
        let relation = Relation::new(owned(&["id", "name"]), vec![]).unwrap();
        assert_eq!(relation.column_index("name").unwrap(), 1);

        let err = relation.column_index("Name").unwrap_err();
        assert!(matches!(err, QueryError::UnknownAttribute { .. }));
    }

    #[test]
    fn test_empty_has_no_attributes() {
        let relation = Relation::empty();
        assert_eq!(relation.arity(), 0);
        assert_eq!(relation.row_count(), 0);
    }
}
