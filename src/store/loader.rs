//! CSV directory loader for the relation store.
//!
//! Every `.csv` file in the data directory becomes one relation: the file
//! stem is the relation name, the first record is the attribute header and
//! the remaining records are data rows. Malformed rows are the loader's
//! concern, not the evaluator's: a row whose arity disagrees with the
//! header is dropped with a warning naming the file and line.

use crate::error::QueryResult;
use crate::relation::{Relation, Row};
use crate::store::RelationStore;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load every `.csv` file in `dir` into a fresh store.
pub fn load_directory(dir: &Path) -> QueryResult<RelationStore> {
    let mut store = RelationStore::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let contents = fs::read_to_string(&path)?;
        match parse_csv(&contents, &path) {
            Some(relation) => {
                debug!(
                    "loaded relation '{}' ({} attributes, {} rows)",
                    name,
                    relation.arity(),
                    relation.row_count()
                );
                store.register(name, relation);
            }
            None => warn!("skipping empty file {}", path.display()),
        }
    }

    Ok(store)
}

/// Parse one file's contents. Returns None when the file has no header
/// record at all.
fn parse_csv(contents: &str, path: &Path) -> Option<Relation> {
    let mut records = contents.lines().filter(|line| !line.trim().is_empty());

    let attributes = split_record(records.next()?);
    let mut rows: Vec<Row> = Vec::new();

    for (line_no, line) in records.enumerate() {
        let row = split_record(line);
        if row.len() != attributes.len() {
            warn!(
                "{}: dropping row at line {} ({} fields, header has {})",
                path.display(),
                line_no + 2,
                row.len(),
                attributes.len()
            );
            continue;
        }
        rows.push(row);
    }

    // Arity was checked per row above, so construction cannot fail.
    Relation::new(attributes, rows).ok()
}

fn split_record(line: &str) -> Vec<String> {
    line.trim_end_matches('\r')
        .split(',')
        .map(|field| field.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_directory() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "EMP.csv", "id,name,salary\n1,Al,50\n2,Bo,90\n");
        write_file(dir.path(), "DEPT.csv", "id,dname\n1,Eng\n");
        write_file(dir.path(), "notes.txt", "not a relation");

        let store = load_directory(dir.path()).unwrap();
        assert_eq!(store.len(), 2);

        let emp = store.get("EMP").unwrap();
        assert_eq!(emp.attributes(), &["id", "name", "salary"]);
        assert_eq!(emp.row_count(), 2);
        assert_eq!(emp.rows()[1], vec!["2", "Bo", "90"]);
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "BAD.csv", "a,b\n1,2\n3\n4,5,6\n7,8\n");

        let store = load_directory(dir.path()).unwrap();
        let bad = store.get("BAD").unwrap();
        assert_eq!(bad.row_count(), 2);
        assert_eq!(bad.rows()[0], vec!["1", "2"]);
        assert_eq!(bad.rows()[1], vec!["7", "8"]);
    }

    #[test]
    fn test_empty_file_is_skipped() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "EMPTY.csv", "");

        let store = load_directory(dir.path()).unwrap();
        assert!(!store.contains("EMPTY"));
    }

    #[test]
    fn test_crlf_and_padding_are_trimmed() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "R.csv", "a, b\r\n1 , 2\r\n");

        let store = load_directory(dir.path()).unwrap();
        let relation = store.get("R").unwrap();
        assert_eq!(relation.attributes(), &["a", "b"]);
        assert_eq!(relation.rows()[0], vec!["1", "2"]);
    }
}
