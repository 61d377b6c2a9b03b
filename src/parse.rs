//! Text-format graph input.
//!
//! The expected format is whitespace-separated integers: vertex count `V`
//! and edge count `E`, followed by `E` records of `start end weight flag`,
//! where flag 1 marks a required edge and 0 an ordinary one. Any whitespace
//! separates tokens; line structure is not significant.

use crate::types::Edge;
use std::fmt;
use std::str::FromStr;

/// Errors produced while parsing graph input.
///
/// Token positions are 1-based ordinals over the whitespace-separated
/// token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before all expected tokens were read.
    MissingToken { expected: &'static str, index: usize },

    /// A token could not be parsed as the expected integer.
    InvalidToken {
        expected: &'static str,
        index: usize,
        token: String,
    },

    /// The required-edge flag was neither 0 nor 1.
    InvalidFlag { index: usize, value: i64 },

    /// Tokens remained after the last expected edge record.
    TrailingInput { index: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingToken { expected, index } => {
                write!(f, "expected {} at token {}, found end of input", expected, index)
            }
            ParseError::InvalidToken {
                expected,
                index,
                token,
            } => {
                write!(f, "expected {} at token {}, found '{}'", expected, index, token)
            }
            ParseError::InvalidFlag { index, value } => {
                write!(
                    f,
                    "required-edge flag at token {} must be 0 or 1, found {}",
                    index, value
                )
            }
            ParseError::TrailingInput { index } => {
                write!(f, "unexpected trailing input at token {}", index)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a whole graph description into `(num_vertices, edges)`.
pub fn parse_graph(input: &str) -> Result<(u32, Vec<Edge>), ParseError> {
    let mut tokens = Tokens::new(input);

    let num_vertices: u32 = tokens.next_int("vertex count")?;
    let num_edges: usize = tokens.next_int("edge count")?;

    let mut edges = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        let u: u32 = tokens.next_int("start vertex")?;
        let v: u32 = tokens.next_int("end vertex")?;
        let weight: i64 = tokens.next_int("edge weight")?;
        let flag: i64 = tokens.next_int("required flag")?;
        let required = match flag {
            0 => false,
            1 => true,
            _ => {
                return Err(ParseError::InvalidFlag {
                    index: tokens.index,
                    value: flag,
                })
            }
        };
        edges.push(Edge::new(u, v, weight, required));
    }

    tokens.finish()?;
    Ok((num_vertices, edges))
}

/// Cursor over whitespace-separated tokens, tracking the 1-based ordinal of
/// the token last consumed.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
    index: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_whitespace(),
            index: 0,
        }
    }

    fn next_int<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        self.index += 1;
        let token = self.iter.next().ok_or(ParseError::MissingToken {
            expected,
            index: self.index,
        })?;
        token.parse().map_err(|_| ParseError::InvalidToken {
            expected,
            index: self.index,
            token: token.to_string(),
        })
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        if self.iter.next().is_some() {
            return Err(ParseError::TrailingInput {
                index: self.index + 1,
            });
        }
        Ok(())
    }
}
