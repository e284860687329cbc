//! Batch query runner and report writer.
//!
//! Runs a query file one line at a time and renders every outcome to the
//! report: the query text, then the result's header and rows (or an error
//! description), then a blank separator line. A failing line never aborts
//! the batch; the report carries one entry per input line in input order.

use crate::error::QueryResult;
use crate::executor::Evaluator;
use crate::query::parse_query;
use crate::relation::Relation;
use crate::store::RelationStore;
use log::{debug, info};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One query line together with its result or failure.
pub struct QueryOutcome {
    pub query: String,
    pub result: QueryResult<Relation>,
}

impl QueryOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Parse and evaluate every line against the store, in input order.
pub fn run_batch<'a, I>(store: &RelationStore, lines: I) -> Vec<QueryOutcome>
where
    I: IntoIterator<Item = &'a str>,
{
    let evaluator = Evaluator::new(store);
    let mut outcomes = Vec::new();

    for line in lines {
        let query = line.trim().to_string();
        let result = parse_query(&query).and_then(|expr| evaluator.eval(&expr));
        match &result {
            Ok(relation) => debug!("query '{}': {} rows", query, relation.row_count()),
            Err(e) => debug!("query '{}' failed: {}", query, e),
        }
        outcomes.push(QueryOutcome { query, result });
    }

    outcomes
}

/// Render outcomes to a writer.
///
/// A successful result writes its header row followed by its data rows,
/// comma-joined. A no-op result has no header and writes nothing between
/// the query text and the separator. Union and difference results come
/// out in whatever order de-duplication left them in; the report does not
/// sort them.
pub fn write_report<W: Write>(out: &mut W, outcomes: &[QueryOutcome]) -> io::Result<()> {
    for outcome in outcomes {
        writeln!(out, "{}", outcome.query)?;
        match &outcome.result {
            Ok(relation) => {
                if !relation.attributes().is_empty() {
                    writeln!(out, "{}", relation.attributes().join(","))?;
                }
                for row in relation.rows() {
                    writeln!(out, "{}", row.join(","))?;
                }
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Run the whole pipeline for one query file: read it, evaluate every
/// line, write the report. Returns (succeeded, failed) counts.
pub fn process_query_file(
    store: &RelationStore,
    query_path: &Path,
    output_path: &Path,
) -> QueryResult<(usize, usize)> {
    let queries = fs::read_to_string(query_path)?;
    let outcomes = run_batch(store, queries.lines());

    let mut out = BufWriter::new(fs::File::create(output_path)?);
    write_report(&mut out, &outcomes)?;
    out.flush()?;

    let succeeded = outcomes.iter().filter(|o| o.is_ok()).count();
    let failed = outcomes.len() - succeeded;
    info!(
        "processed {} queries ({} succeeded, {} failed)",
        outcomes.len(),
        succeeded,
        failed
    );
    Ok((succeeded, failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::test_support::sample_store;

    fn report_for(lines: &[&str]) -> String {
        let store = sample_store();
        let outcomes = run_batch(&store, lines.iter().copied());
        let mut buffer = Vec::new();
        write_report(&mut buffer, &outcomes).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_successful_query_writes_header_and_rows() {
        let report = report_for(&["PROJ (SELE (EMP) {salary > '60'}) {name}"]);
        assert_eq!(
            report,
            "PROJ (SELE (EMP) {salary > '60'}) {name}\nname\nBo\n\n"
        );
    }

    #[test]
    fn test_failed_query_writes_error_line() {
        let report = report_for(&["SELE (GHOST) {x = 'y'}"]);
        assert_eq!(
            report,
            "SELE (GHOST) {x = 'y'}\nError: relation 'GHOST' not found\n\n"
        );
    }

    #[test]
    fn test_blank_line_writes_only_the_separator() {
        let report = report_for(&[""]);
        assert_eq!(report, "\n\n");
    }

    #[test]
    fn test_batch_continues_after_a_failure() {
        let store = sample_store();
        let outcomes = run_batch(
            &store,
            ["SELE (GHOST) {x = 'y'}", "PROJ (EMP) {name}"],
        );

        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].is_ok());
        assert!(outcomes[1].is_ok());
    }

    #[test]
    fn test_one_entry_per_line_in_input_order() {
        let report = report_for(&["EMP", "nonsense line", "DEPT"]);
        let entries: Vec<&str> = report.split("\n\n").collect();
        assert!(entries[0].starts_with("EMP\n"));
        assert_eq!(entries[1], "nonsense line");
        assert!(entries[2].starts_with("DEPT\n"));
    }
}
