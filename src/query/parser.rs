// Query parser - recursive descent over tokens

use super::ast::QueryExpr;
use super::condition::parse_condition;
use super::lexer::Lexer;
use super::token::Token;
use crate::error::{QueryError, QueryResult};

/// Parse one query line into an expression tree.
///
/// Dispatch follows the language's fixed rules: a leading `SELE...`,
/// `PROJ...`, `X`, `JOIN` or `*` keyword picks the operator; otherwise the
/// line is split once on a top-level `U` (union) or `-` (difference) or
/// `*` (cross product); a lone name is a relation reference. Blank or
/// unrecognized lines parse to `NoOp`, never to an error, so a garbage
/// line yields an empty result instead of aborting the batch.
pub fn parse_query(line: &str) -> QueryResult<QueryExpr> {
    let tokens = Lexer::new(line.trim()).tokenize();
    parse_expr(&tokens)
}

fn parse_expr(tokens: &[Token]) -> QueryResult<QueryExpr> {
    match tokens.first() {
        None => Ok(QueryExpr::NoOp),
        Some(Token::Select) => {
            let (source, payload) = parse_source_and_payload(&tokens[1..])?;
            let condition = parse_condition(&payload)?;
            Ok(QueryExpr::Select {
                source: Box::new(source),
                condition,
            })
        }
        Some(Token::Project) => {
            let (source, payload) = parse_source_and_payload(&tokens[1..])?;
            let attributes = payload.split(',').map(|a| a.trim().to_string()).collect();
            Ok(QueryExpr::Project {
                source: Box::new(source),
                attributes,
            })
        }
        Some(Token::Cross) => {
            let inner = parenthesized(&tokens[1..])?;
            let (left, right) = split_on_star(inner, "cross product")?;
            Ok(QueryExpr::CrossProduct { left, right })
        }
        Some(Token::Join) => {
            let inner = parenthesized(&tokens[1..])?;
            let (left, right) = split_on_star(inner, "join")?;
            Ok(QueryExpr::Join { left, right })
        }
        Some(Token::Star) => {
            let inner = parenthesized(&tokens[1..])?;
            let (left, right) = split_on_star(inner, "natural join")?;
            Ok(QueryExpr::NaturalJoin { left, right })
        }
        _ => parse_infix(tokens),
    }
}

/// Handle lines and operands that carry their operator between the
/// operands: union, difference and the bare `A * B` form that a
/// projection or cross product may wrap.
fn parse_infix(tokens: &[Token]) -> QueryResult<QueryExpr> {
    if let Some(i) = find_top_level(tokens, &Token::Union) {
        let left = parse_expr(&tokens[..i])?;
        let right = parse_expr(&tokens[i + 1..])?;
        return Ok(QueryExpr::Union {
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    if let Some(i) = find_top_level(tokens, &Token::Minus) {
        let left = parse_expr(&tokens[..i])?;
        let right = parse_expr(&tokens[i + 1..])?;
        return Ok(QueryExpr::Difference {
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    if find_top_level(tokens, &Token::Star).is_some() {
        let (left, right) = split_on_star(tokens, "cross product")?;
        return Ok(QueryExpr::CrossProduct { left, right });
    }

    // Fully parenthesized operand: strip and recurse.
    if tokens.first() == Some(&Token::LeftParen) {
        if let Ok(close) = matching_paren(tokens, 0) {
            if close == tokens.len() - 1 {
                return parse_expr(&tokens[1..close]);
            }
        }
    }

    if let [Token::Word(name)] = tokens {
        return Ok(QueryExpr::RelationRef(name.clone()));
    }

    Ok(QueryExpr::NoOp)
}

/// Parse `( <operand> ) { <payload> }`, the shape shared by selection and
/// projection. The operand runs from the first `(` to its matching `)`.
fn parse_source_and_payload(tokens: &[Token]) -> QueryResult<(QueryExpr, String)> {
    if tokens.first() != Some(&Token::LeftParen) {
        return Err(QueryError::Parse(
            "expected '(' after operator keyword".to_string(),
        ));
    }
    let close = matching_paren(tokens, 0)?;
    let source = parse_expr(&tokens[1..close])?;

    match tokens.get(close + 1) {
        Some(Token::Payload(payload)) => Ok((source, payload.clone())),
        _ => Err(QueryError::Parse(
            "expected '{...}' after the operand".to_string(),
        )),
    }
}

/// Return the tokens between a leading `(` and its matching `)`.
fn parenthesized(tokens: &[Token]) -> QueryResult<&[Token]> {
    if tokens.first() != Some(&Token::LeftParen) {
        return Err(QueryError::Parse(
            "expected a parenthesized operand list".to_string(),
        ));
    }
    let close = matching_paren(tokens, 0)?;
    Ok(&tokens[1..close])
}

/// Split an operand list on its top-level `*`. Exactly two operands are
/// required; anything else is an arity error, matching the language's
/// "cross product requires exactly two relations" rule.
fn split_on_star(
    tokens: &[Token],
    what: &str,
) -> QueryResult<(Box<QueryExpr>, Box<QueryExpr>)> {
    let mut positions = Vec::new();
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => depth = depth.saturating_sub(1),
            Token::Star if depth == 0 => positions.push(i),
            _ => {}
        }
    }

    if positions.len() != 1 {
        return Err(QueryError::ArityError(format!(
            "{} requires exactly two operands, got {}",
            what,
            positions.len() + 1
        )));
    }

    let left = parse_expr(&tokens[..positions[0]])?;
    let right = parse_expr(&tokens[positions[0] + 1..])?;
    Ok((Box::new(left), Box::new(right)))
}

/// Find the first occurrence of `target` outside any parentheses.
fn find_top_level(tokens: &[Token], target: &Token) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => depth = depth.saturating_sub(1),
            _ if token == target && depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Index of the `)` matching the `(` at `open`.
fn matching_paren(tokens: &[Token], open: usize) -> QueryResult<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(QueryError::Parse("unbalanced parentheses".to_string()))
}
