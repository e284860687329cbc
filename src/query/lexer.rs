// Query lexer - tokenizes one query line

use super::token::Token;

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Get the next token from the input.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Token::Eof;
        };

        match ch {
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            '*' => {
                self.advance();
                Token::Star
            }
            '-' => {
                self.advance();
                Token::Minus
            }
            '{' => self.read_payload(),
            // A stray closing brace has no opening counterpart; emit it
            // as a word so the parser can treat the line as a no-op.
            '}' => {
                self.advance();
                Token::Word("}".to_string())
            }
            _ => self.read_word(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read everything between `{` and `}` as one raw payload token. The
    /// condition parser splits it further on its own lexical rules.
    fn read_payload(&mut self) -> Token {
        self.advance(); // skip opening brace
        let mut payload = String::new();

        while let Some(ch) = self.current_char() {
            if ch == '}' {
                self.advance(); // skip closing brace
                break;
            }
            payload.push(ch);
            self.advance();
        }

        Token::Payload(payload.trim().to_string())
    }

    /// Read a bare word: any run of characters that is not whitespace and
    /// not one of the structural symbols.
    fn read_word(&mut self) -> Token {
        let mut word = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() || matches!(ch, '(' | ')' | '{' | '}' | '*' | '-') {
                break;
            }
            word.push(ch);
            self.advance();
        }

        Token::keyword_from_str(&word).unwrap_or(Token::Word(word))
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            if token == Token::Eof {
                break;
            }
            tokens.push(token);
        }

        tokens
    }
}
