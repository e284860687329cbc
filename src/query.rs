//! Query-language front end.
//!
//! Turns one line of the relational-algebra query language into a
//! `QueryExpr` tree: the lexer produces tokens, the parser does
//! recursive-descent over them, and the condition parser handles the
//! `{ attr op 'value' }` payload of a selection.

pub mod ast;
pub mod condition;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Combinator, CompareOp, Condition, Predicate, QueryExpr};
pub use condition::parse_condition;
pub use parser::parse_query;
