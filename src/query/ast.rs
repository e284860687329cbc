// Query expression tree definitions

/// One parsed query line. `source`, `left` and `right` are themselves
/// query expressions, so queries nest (a projection over a cross product,
/// a difference of two selections, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpr {
    Select {
        source: Box<QueryExpr>,
        condition: Condition,
    },
    Project {
        source: Box<QueryExpr>,
        attributes: Vec<String>,
    },
    CrossProduct {
        left: Box<QueryExpr>,
        right: Box<QueryExpr>,
    },
    Union {
        left: Box<QueryExpr>,
        right: Box<QueryExpr>,
    },
    Difference {
        left: Box<QueryExpr>,
        right: Box<QueryExpr>,
    },
    /// Recognized by the parser but rejected by the evaluator with
    /// `NotImplemented`. Join predicate semantics were never defined for
    /// this language.
    Join {
        left: Box<QueryExpr>,
        right: Box<QueryExpr>,
    },
    /// Same status as `Join`.
    NaturalJoin {
        left: Box<QueryExpr>,
        right: Box<QueryExpr>,
    },
    /// Leaf referencing a relation in the store by name.
    RelationRef(String),
    /// A blank or unrecognized line. Evaluates to an empty result.
    NoOp,
}

/// A selection condition: one or more predicates plus the combinator that
/// joined them in the query text.
///
/// The combinator is recorded but not honored: evaluation always requires
/// all predicates to hold, even when the query wrote `OR`. This mirrors
/// the language's established behavior and is pinned by tests; do not
/// "fix" it here without a language-level decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub predicates: Vec<Predicate>,
    pub combinator: Combinator,
}

/// A single comparison against one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub attribute: String,
    pub op: CompareOp,
    pub literal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Numeric greater-than. Both sides are parsed as floats on demand.
    Greater,
    /// Numeric less-than.
    Less,
    /// Textual equality.
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}
