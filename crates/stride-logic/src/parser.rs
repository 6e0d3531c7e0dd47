//! Recursive-descent parser producing an [`Expr`] tree.
//!
//! ```text
//! or_expr  := and_expr ( "or" and_expr )*
//! and_expr := unary ( "and" unary )*
//! unary    := "not" unary | primary
//! primary  := literal | variable | "(" or_expr ")"
//! ```

use crate::Expr;
use crate::error::PredicateError;
use crate::lexer::{Token, TokenKind, tokenize};

const OPERAND: &str = "'p', 'q', 'true', 'false', 'not' or '('";
const OPERATOR: &str = "'and', 'or' or end of expression";

/// Deepest tree a predicate may produce, counting both nesting (`not`, `(`)
/// and chained `and`/`or` operators.
pub const MAX_DEPTH: usize = 64;

pub fn parse(input: &str) -> Result<Expr, PredicateError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(PredicateError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        nesting: 0,
    };
    let node = parser.or_expr()?;

    match parser.peek() {
        None => Ok(node.expr),
        Some(Token {
            kind: TokenKind::RParen,
            offset,
        }) => Err(PredicateError::UnbalancedParen { offset }),
        Some(token) => Err(PredicateError::UnexpectedToken {
            found: token.kind.describe().to_string(),
            expected: OPERATOR,
            offset: token.offset,
        }),
    }
}

/// A subtree together with its height.
struct Node {
    expr: Expr,
    depth: usize,
}

impl Node {
    const fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1 }
    }

    fn binary(
        make: fn(Box<Expr>, Box<Expr>) -> Expr,
        lhs: Self,
        rhs: Self,
        offset: usize,
    ) -> Result<Self, PredicateError> {
        let depth = lhs.depth.max(rhs.depth) + 1;
        if depth > MAX_DEPTH {
            return Err(PredicateError::TooDeep {
                offset,
                limit: MAX_DEPTH,
            });
        }
        Ok(Self {
            expr: make(Box::new(lhs.expr), Box::new(rhs.expr)),
            depth,
        })
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Open `not`/`(` frames on the recursion stack.
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.peek().filter(|t| t.kind == kind)?;
        self.pos += 1;
        Some(token)
    }

    /// Checked before recursing, so input depth never reaches the call stack.
    fn enter(&mut self, offset: usize) -> Result<(), PredicateError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(PredicateError::TooDeep {
                offset,
                limit: MAX_DEPTH,
            });
        }
        Ok(())
    }

    fn or_expr(&mut self) -> Result<Node, PredicateError> {
        let mut lhs = self.and_expr()?;
        while let Some(op) = self.eat(TokenKind::Or) {
            let rhs = self.and_expr()?;
            lhs = Node::binary(Expr::Or, lhs, rhs, op.offset)?;
        }
        Ok(lhs)
    }

    fn and_expr(&mut self) -> Result<Node, PredicateError> {
        let mut lhs = self.unary()?;
        while let Some(op) = self.eat(TokenKind::And) {
            let rhs = self.unary()?;
            lhs = Node::binary(Expr::And, lhs, rhs, op.offset)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Node, PredicateError> {
        let Some(op) = self.eat(TokenKind::Not) else {
            return self.primary();
        };
        self.enter(op.offset)?;
        let inner = self.unary()?;
        self.nesting -= 1;

        let depth = inner.depth + 1;
        if depth > MAX_DEPTH {
            return Err(PredicateError::TooDeep {
                offset: op.offset,
                limit: MAX_DEPTH,
            });
        }
        Ok(Node {
            expr: Expr::Not(Box::new(inner.expr)),
            depth,
        })
    }

    fn primary(&mut self) -> Result<Node, PredicateError> {
        let Some(token) = self.peek() else {
            return Err(PredicateError::UnexpectedEnd { expected: OPERAND });
        };
        self.pos += 1;

        match token.kind {
            TokenKind::Literal(value) => Ok(Node::leaf(Expr::Literal(value))),
            TokenKind::Var(var) => Ok(Node::leaf(Expr::Var(var))),
            TokenKind::LParen => {
                self.enter(token.offset)?;
                let inner = self.or_expr()?;
                self.nesting -= 1;
                if self.eat(TokenKind::RParen).is_some() {
                    Ok(inner)
                } else {
                    Err(PredicateError::UnbalancedParen {
                        offset: token.offset,
                    })
                }
            }
            TokenKind::RParen | TokenKind::And | TokenKind::Or | TokenKind::Not => {
                Err(PredicateError::UnexpectedToken {
                    found: token.kind.describe().to_string(),
                    expected: OPERAND,
                    offset: token.offset,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{MAX_DEPTH, parse};
    use crate::{Expr, PredicateError, Variable};

    fn var(v: Variable) -> Box<Expr> {
        Box::new(Expr::Var(v))
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let expr = parse("p or q and false").expect("should parse");
        assert_eq!(
            expr,
            Expr::Or(
                var(Variable::P),
                Box::new(Expr::And(var(Variable::Q), Box::new(Expr::Literal(false))))
            )
        );
    }

    #[test]
    fn not_binds_tighter_than_and() {
        let expr = parse("not p and q").expect("should parse");
        assert_eq!(
            expr,
            Expr::And(Box::new(Expr::Not(var(Variable::P))), var(Variable::Q))
        );
    }

    #[test]
    fn same_precedence_is_left_associative() {
        let expr = parse("p or q or true").expect("should parse");
        assert_eq!(
            expr,
            Expr::Or(
                Box::new(Expr::Or(var(Variable::P), var(Variable::Q))),
                Box::new(Expr::Literal(true))
            )
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let expr = parse("not (p or q)").expect("should parse");
        assert_eq!(
            expr,
            Expr::Not(Box::new(Expr::Or(var(Variable::P), var(Variable::Q))))
        );
    }

    #[test]
    fn double_negation_parses() {
        let expr = parse("not not q").expect("should parse");
        assert_eq!(expr, Expr::Not(Box::new(Expr::Not(var(Variable::Q)))));
    }

    #[test]
    fn empty_and_blank_input_is_rejected() {
        assert_eq!(parse(""), Err(PredicateError::Empty));
        assert_eq!(parse("   "), Err(PredicateError::Empty));
    }

    #[test]
    fn dangling_operator_reports_end() {
        let err = parse("p and").expect_err("should fail");
        assert!(matches!(err, PredicateError::UnexpectedEnd { .. }));
    }

    #[test]
    fn missing_close_paren_points_at_open() {
        let err = parse("p and (q or p").expect_err("should fail");
        assert_eq!(err, PredicateError::UnbalancedParen { offset: 6 });
    }

    #[test]
    fn stray_close_paren_is_reported() {
        let err = parse("p)").expect_err("should fail");
        assert_eq!(err, PredicateError::UnbalancedParen { offset: 1 });
    }

    #[test]
    fn adjacent_operands_are_rejected() {
        let err = parse("p q").expect_err("should fail");
        assert!(matches!(
            err,
            PredicateError::UnexpectedToken { offset: 2, .. }
        ));
    }

    #[test]
    fn operator_in_operand_position_is_rejected() {
        let err = parse("or p").expect_err("should fail");
        assert!(err.to_string().contains("unexpected 'or' at offset 0"));
    }

    #[test]
    fn nesting_at_the_limit_parses() {
        let depth = MAX_DEPTH - 1;
        let expr = format!("{}p", "not ".repeat(depth));
        assert!(parse(&expr).is_ok());

        let parens = format!("{}p{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(parse(&parens).is_ok());
    }

    #[test]
    fn nesting_past_the_limit_is_rejected() {
        let parens = format!("{}p{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(
            parse(&parens),
            Err(PredicateError::TooDeep {
                offset: MAX_DEPTH,
                limit: MAX_DEPTH
            })
        );
    }

    #[test]
    fn long_operator_chain_is_rejected() {
        let expr = format!("{}p", "p and ".repeat(MAX_DEPTH));
        assert!(matches!(parse(&expr), Err(PredicateError::TooDeep { .. })));

        let short = format!("{}p", "p or ".repeat(MAX_DEPTH - 2));
        assert!(parse(&short).is_ok());
    }
}
