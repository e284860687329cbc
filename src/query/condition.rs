// Condition parser - turns a `{...}` payload into predicates

use super::ast::{Combinator, CompareOp, Condition, Predicate};
use crate::error::{QueryError, QueryResult};

/// Parse a selection condition.
///
/// Splitting is purely lexical: the string is split on the literal token
/// `AND`, else on `OR`, else it is a single predicate. Each segment must
/// whitespace-split into exactly three tokens (`attribute`, `operator`,
/// `literal`); quotes are stripped from the literal. Empty segments are
/// ignored.
pub fn parse_condition(input: &str) -> QueryResult<Condition> {
    let (segments, combinator): (Vec<&str>, Combinator) = if input.contains("AND") {
        (input.split("AND").collect(), Combinator::And)
    } else if input.contains("OR") {
        (input.split("OR").collect(), Combinator::Or)
    } else {
        (vec![input], Combinator::And)
    };

    let mut predicates = Vec::new();
    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        predicates.push(parse_predicate(segment)?);
    }

    if predicates.is_empty() {
        return Err(QueryError::MalformedCondition(input.to_string()));
    }

    Ok(Condition {
        predicates,
        combinator,
    })
}

fn parse_predicate(segment: &str) -> QueryResult<Predicate> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(QueryError::MalformedCondition(segment.to_string()));
    }

    let op = match tokens[1] {
        ">" => CompareOp::Greater,
        "<" => CompareOp::Less,
        "=" => CompareOp::Equal,
        _ => return Err(QueryError::MalformedCondition(segment.to_string())),
    };

    Ok(Predicate {
        attribute: tokens[0].to_string(),
        op,
        literal: tokens[2].trim_matches('\'').to_string(),
    })
}
