//! Projection operator.
//!
//! Reduces every source row to the requested columns. The result header
//! is the requested attribute list in the requested order; duplicates are
//! allowed and row order is preserved.

use crate::error::QueryResult;
use crate::relation::Relation;

pub fn project(source: &Relation, attributes: &[String]) -> QueryResult<Relation> {
    let columns: Vec<usize> = attributes
        .iter()
        .map(|attribute| source.column_index(attribute))
        .collect::<QueryResult<_>>()?;

    let rows = source
        .rows()
        .iter()
        .map(|row| columns.iter().map(|&c| row[c].clone()).collect())
        .collect();

    Relation::new(attributes.to_vec(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::executor::test_support::relation;
    use crate::executor::{cross_product, select};
    use crate::query::parse_condition;

    fn emp() -> Relation {
        relation(
            &["id", "name", "salary"],
            &[&["1", "Al", "50"], &["2", "Bo", "90"]],
        )
    }

    #[test]
    fn test_project_reorders_columns() {
        let result = project(&emp(), &["salary".to_string(), "id".to_string()]).unwrap();
        assert_eq!(result.attributes(), &["salary", "id"]);
        assert_eq!(result.rows()[0], vec!["50", "1"]);
        assert_eq!(result.rows()[1], vec!["90", "2"]);
    }

    #[test]
    fn test_duplicate_attributes_are_allowed() {
        let result = project(&emp(), &["id".to_string(), "id".to_string()]).unwrap();
        assert_eq!(result.attributes(), &["id", "id"]);
        assert_eq!(result.rows()[0], vec!["1", "1"]);
    }

    #[test]
    fn test_unknown_attribute() {
        let err = project(&emp(), &["wage".to_string()]).unwrap_err();
        assert!(matches!(err, QueryError::UnknownAttribute { .. }));
    }

    #[test]
    fn test_project_over_cross_product() {
        let dept = relation(&["id", "dname"], &[&["1", "Eng"]]);
        let product = cross_product(&emp(), &dept).unwrap();
        let result = project(&product, &["name".to_string(), "dname".to_string()]).unwrap();

        assert_eq!(result.attributes(), &["name", "dname"]);
        assert_eq!(result.rows()[0], vec!["Al", "Eng"]);
        assert_eq!(result.rows()[1], vec!["Bo", "Eng"]);
    }

    #[test]
    fn test_select_and_project_commute_when_filter_column_is_kept() {
        let source = emp();
        let condition = parse_condition("salary > '60'").unwrap();
        let attributes = vec!["name".to_string(), "salary".to_string()];

        let select_first =
            project(&select(&source, &condition).unwrap(), &attributes).unwrap();
        let project_first =
            select(&project(&source, &attributes).unwrap(), &condition).unwrap();

        assert_eq!(select_first, project_first);
    }
}
