//! Tokenizer for predicate expressions.
//!
//! Words are classified as whole tokens, so a variable letter embedded in a
//! longer word (`top`, `quit`) never binds to a variable.

use crate::error::PredicateError;
use crate::Variable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    And,
    Or,
    Not,
    Literal(bool),
    Var(Variable),
}

impl TokenKind {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Not => "'not'",
            Self::Literal(true) => "'true'",
            Self::Literal(false) => "'false'",
            Self::Var(Variable::P) => "'p'",
            Self::Var(Variable::Q) => "'q'",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Split `input` into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, PredicateError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let kind = match ch {
            '(' => {
                chars.next();
                TokenKind::LParen
            }
            ')' => {
                chars.next();
                TokenKind::RParen
            }
            c if is_word_char(c) => {
                let mut end = offset;
                while let Some(&(idx, c)) = chars.peek() {
                    if !is_word_char(c) {
                        break;
                    }
                    end = idx + c.len_utf8();
                    chars.next();
                }
                classify_word(&input[offset..end], offset)?
            }
            other => return Err(PredicateError::UnexpectedChar { ch: other, offset }),
        };

        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn classify_word(word: &str, offset: usize) -> Result<TokenKind, PredicateError> {
    let kind = match word.to_ascii_lowercase().as_str() {
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "true" => TokenKind::Literal(true),
        "false" => TokenKind::Literal(false),
        "p" => TokenKind::Var(Variable::P),
        "q" => TokenKind::Var(Variable::Q),
        _ => {
            return Err(PredicateError::UnknownToken {
                token: word.to_string(),
                offset,
            });
        }
    };
    Ok(kind)
}
