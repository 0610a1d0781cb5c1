//! Textual tree literals
//!
//! Grammar (whitespace-insensitive):
//!
//! ```text
//! tree  :=  ""  |  expr
//! expr  :=  "_"  |  INT  |  "(" INT expr expr ")"
//! ```
//!
//! `_` is an empty subtree and a bare integer is leaf shorthand, so the
//! five-node sample tree reads `(2 1 (4 3 5))`. Used by the CLI; library
//! callers normally build trees with [`Tree::leaf`] / [`Tree::node`].

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use super::{Link, Tree};

/// Errors produced while reading a tree literal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The literal ended in the middle of an expression.
    #[error("unexpected end of input in tree literal")]
    UnexpectedEnd,

    /// A character that fits no production.
    #[error("unexpected character {ch:?} at byte {at}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset into the literal.
        at: usize,
    },

    /// A node value that does not parse as an integer.
    #[error("invalid node value {text:?} at byte {at}")]
    InvalidValue {
        /// The text that failed to parse.
        text: String,
        /// Byte offset of its first character.
        at: usize,
    },

    /// Leftover input after a complete literal.
    #[error("trailing input after tree literal at byte {at}")]
    TrailingInput {
        /// Byte offset of the first leftover character.
        at: usize,
    },
}

/// Parse a tree literal into an owned [`Tree`].
///
/// An empty (or all-whitespace) literal is the empty tree.
pub fn parse_tree(input: &str) -> Result<Tree<i64>, ParseError> {
    let mut parser = Parser {
        chars: input.char_indices().peekable(),
    };
    let mut tree = Tree::new();

    parser.skip_ws();
    let root = if parser.peek().is_none() {
        None
    } else {
        parser.expr(&mut tree)?
    };
    tree.set_root(root);

    parser.skip_ws();
    if let Some((at, _)) = parser.peek() {
        return Err(ParseError::TrailingInput { at });
    }
    Ok(tree)
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some((_, ch)) if ch.is_whitespace()) {
            self.bump();
        }
    }

    fn expr(&mut self, tree: &mut Tree<i64>) -> Result<Link, ParseError> {
        self.skip_ws();
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some((_, '_')) => {
                self.bump();
                Ok(None)
            }
            Some((_, '(')) => {
                self.bump();
                let value = self.value()?;
                let left = self.expr(tree)?;
                let right = self.expr(tree)?;
                self.skip_ws();
                match self.bump() {
                    Some((_, ')')) => Ok(Some(tree.node(value, left, right))),
                    Some((at, ch)) => Err(ParseError::UnexpectedChar { ch, at }),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            Some(_) => {
                let value = self.value()?;
                Ok(Some(tree.leaf(value)))
            }
        }
    }

    fn value(&mut self) -> Result<i64, ParseError> {
        self.skip_ws();
        let (start, first) = self.peek().ok_or(ParseError::UnexpectedEnd)?;
        if first != '-' && !first.is_ascii_digit() {
            return Err(ParseError::UnexpectedChar {
                ch: first,
                at: start,
            });
        }

        let mut text = String::new();
        text.push(first);
        self.bump();
        while let Some((_, ch)) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.bump();
        }

        text.parse()
            .map_err(|_| ParseError::InvalidValue { text, at: start })
    }
}
