//! Named relation storage.
//!
//! The store is populated once at startup by the loader and is read-only
//! for the rest of the run. The evaluator borrows it; there is no
//! process-wide mutable state.

use crate::error::{QueryError, QueryResult};
use crate::relation::Relation;
use std::collections::HashMap;

pub mod loader;

/// Immutable-after-load map from relation name to relation.
#[derive(Debug, Default)]
pub struct RelationStore {
    relations: HashMap<String, Relation>,
}

impl RelationStore {
    pub fn new() -> Self {
        RelationStore {
            relations: HashMap::new(),
        }
    }

    /// Register a relation under a name. A later registration under the
    /// same name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, relation: Relation) {
        self.relations.insert(name.into(), relation);
    }

    /// Look up a relation by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> QueryResult<&Relation> {
        self.relations
            .get(name)
            .ok_or_else(|| QueryError::UnknownRelation(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
