// Query language tokens for lexical analysis

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare word: a relation name, attribute name or number.
    Word(String),
    /// Raw text captured between `{` and `}`: a selection condition or a
    /// projection attribute list.
    Payload(String),

    // Keywords
    Select,
    Project,
    Join,
    Union,
    Cross,

    // Symbols
    Star,
    Minus,
    LeftParen,
    RightParen,

    Eof,
}

impl Token {
    /// Map a bare word to its keyword token, if it is one.
    ///
    /// `SELE` and `PROJ` are prefixes: the original language accepts any
    /// spelling that starts with them (`SELECT`, `PROJECTION`, ...).
    /// `U`, `X` and `JOIN` must match exactly so that relation names like
    /// `USERS` stay words.
    pub fn keyword_from_str(word: &str) -> Option<Token> {
        if word.starts_with("SELE") {
            Some(Token::Select)
        } else if word.starts_with("PROJ") {
            Some(Token::Project)
        } else {
            match word {
                "JOIN" => Some(Token::Join),
                "U" => Some(Token::Union),
                "X" => Some(Token::Cross),
                _ => None,
            }
        }
    }
}
