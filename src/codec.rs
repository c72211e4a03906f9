//! Pre-order text encoding.
//!
//! Every node is written as `<value>,` followed by its left and right
//! subtrees; an absent child is written as `null,`. The tree `1(2,3)`
//! encodes to `1,2,null,null,3,null,null,` and the empty tree to `null,`.

use std::fmt::Write;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::arena::{BinaryTree, NodeId, Side, Value};
pub use crate::arena::DEFAULT_MAX_DEPTH;
use crate::errors::{TreeError, TreeResult};

pub const DELIMITER: char = ',';
pub const NULL_TOKEN: &str = "null";

impl BinaryTree {
    #[instrument(level = "debug", skip(self))]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.write_subtree(self.root(), &mut out);
        out
    }

    fn write_subtree(&self, id: Option<NodeId>, out: &mut String) {
        match id.and_then(|id| self.node(id)) {
            Some(node) => {
                // Writing into a String cannot fail
                let _ = write!(out, "{}{}", node.value(), DELIMITER);
                self.write_subtree(node.left(), out);
                self.write_subtree(node.right(), out);
            }
            None => {
                out.push_str(NULL_TOKEN);
                out.push(DELIMITER);
            }
        }
    }

    /// Decodes with the [`DEFAULT_MAX_DEPTH`] nesting limit.
    pub fn deserialize(input: &str) -> TreeResult<Self> {
        Self::deserialize_bounded(input, DEFAULT_MAX_DEPTH)
    }

    /// Decodes `input`, rejecting trees nested deeper than `max_depth` levels.
    ///
    /// Surrounding whitespace is ignored. Malformed input never yields a
    /// partial tree.
    #[instrument(level = "debug", skip(input), fields(len = input.len()))]
    pub fn deserialize_bounded(input: &str, max_depth: usize) -> TreeResult<Self> {
        let body = input
            .trim()
            .strip_suffix(DELIMITER)
            .ok_or(TreeError::MissingTerminator)?;
        let tokens: Vec<&str> = body.split(DELIMITER).collect();

        let mut decoder = Decoder {
            tokens: &tokens,
            position: 0,
            tree: BinaryTree::with_depth_limit(max_depth),
        };
        decoder.decode_root()?;

        if decoder.position < tokens.len() {
            return Err(TreeError::TrailingTokens {
                position: decoder.position,
            });
        }
        debug!("decoded {} nodes from {} tokens", decoder.tree.len(), tokens.len());
        Ok(decoder.tree)
    }
}

impl FromStr for BinaryTree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s)
    }
}

enum Token {
    Null,
    Value(Value),
}

struct Decoder<'a> {
    tokens: &'a [&'a str],
    position: usize,
    tree: BinaryTree,
}

impl Decoder<'_> {
    fn next_token(&mut self) -> TreeResult<Token> {
        let position = self.position;
        let raw = self
            .tokens
            .get(position)
            .ok_or(TreeError::UnexpectedEnd { position })?;
        self.position += 1;
        parse_token(raw, position)
    }

    fn decode_root(&mut self) -> TreeResult<()> {
        if let Token::Value(value) = self.next_token()? {
            let root = self.tree.set_root(value)?;
            self.decode_children(root)?;
        }
        Ok(())
    }

    // The tree's depth limit stops the recursion
    fn decode_children(&mut self, parent: NodeId) -> TreeResult<()> {
        for side in [Side::Left, Side::Right] {
            if let Token::Value(value) = self.next_token()? {
                let child = self.tree.insert_child(parent, side, value)?;
                self.decode_children(child)?;
            }
        }
        Ok(())
    }
}

fn parse_token(raw: &str, position: usize) -> TreeResult<Token> {
    if raw == NULL_TOKEN {
        return Ok(Token::Null);
    }
    // i64::from_str also accepts a leading '+', which the format does not
    if raw.starts_with('+') {
        return Err(TreeError::InvalidToken {
            token: raw.to_string(),
            position,
        });
    }
    raw.parse::<Value>()
        .map(Token::Value)
        .map_err(|_| TreeError::InvalidToken {
            token: raw.to_string(),
            position,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        assert!(matches!(parse_token("null", 0), Ok(Token::Null)));
        assert!(matches!(parse_token("-17", 0), Ok(Token::Value(-17))));
        assert!(matches!(
            parse_token("+1", 3),
            Err(TreeError::InvalidToken { position: 3, .. })
        ));
        assert!(matches!(
            parse_token(" 1", 0),
            Err(TreeError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_token("NULL", 0),
            Err(TreeError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_token("", 0),
            Err(TreeError::InvalidToken { .. })
        ));
    }
}
