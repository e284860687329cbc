//! Query evaluator.
//!
//! Evaluates a `QueryExpr` tree bottom-up against the relation store.
//! Every operator consumes already-evaluated operand relations and
//! allocates a fresh result relation, so evaluation never mutates the
//! store and queries stay independent of each other.

use crate::error::{QueryError, QueryResult};
use crate::query::QueryExpr;
use crate::relation::Relation;
use crate::store::RelationStore;

pub mod cross_product;
pub mod project;
pub mod select;
pub mod set_ops;

pub use cross_product::cross_product;
pub use project::project;
pub use select::select;
pub use set_ops::{difference, union};

/// Evaluates query expressions against a read-only relation store.
pub struct Evaluator<'a> {
    store: &'a RelationStore,
}

impl<'a> Evaluator<'a> {
    pub fn new(store: &'a RelationStore) -> Self {
        Evaluator { store }
    }

    /// Recursively evaluate an expression to a result relation.
    ///
    /// `Join` and `NaturalJoin` are recognized by the parser but have no
    /// defined semantics in this language; they fail fast here instead of
    /// silently producing an empty result.
    pub fn eval(&self, expr: &QueryExpr) -> QueryResult<Relation> {
        match expr {
            QueryExpr::RelationRef(name) => self.store.get(name).cloned(),
            QueryExpr::Select { source, condition } => {
                select(&self.eval(source)?, condition)
            }
            QueryExpr::Project { source, attributes } => {
                project(&self.eval(source)?, attributes)
            }
            QueryExpr::CrossProduct { left, right } => {
                cross_product(&self.eval(left)?, &self.eval(right)?)
            }
            QueryExpr::Union { left, right } => {
                union(&self.eval(left)?, &self.eval(right)?)
            }
            QueryExpr::Difference { left, right } => {
                difference(&self.eval(left)?, &self.eval(right)?)
            }
            QueryExpr::Join { .. } => Err(QueryError::NotImplemented("JOIN")),
            QueryExpr::NaturalJoin { .. } => Err(QueryError::NotImplemented("natural join")),
            QueryExpr::NoOp => Ok(Relation::empty()),
        }
    }
}
