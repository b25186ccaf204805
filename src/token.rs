use std::fmt::{Display, Formatter};

use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::color::{Color, UNCOLORED};

/// Reasons a [`Token`] cannot be constructed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Both ends were [`UNCOLORED`].
    #[error("a match stick must be colored on at least one end")]
    Uncolored,
}

/// A match stick: a single-use token with two colored ends.
///
/// Tokens are identified by their position in a puzzle's token list, never by their colors;
/// two tokens with the same colors are still two separately usable sticks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    color_a: Color,
    color_b: Color,
}

impl Token {
    /// Construct a token with ends `(color_a, color_b)`, in that order.
    pub fn new(color_a: Color, color_b: Color) -> Result<Self, TokenError> {
        if color_a == UNCOLORED && color_b == UNCOLORED {
            return Err(TokenError::Uncolored);
        }

        Ok(Self { color_a, color_b })
    }

    /// The two end colors in their current orientation.
    #[inline]
    pub fn colors(&self) -> (Color, Color) {
        (self.color_a, self.color_b)
    }

    /// The two end colors, disregarding orientation.
    #[inline]
    pub fn ends(&self) -> UnorderedPair<Color> {
        UnorderedPair(self.color_a, self.color_b)
    }

    /// Swap the two ends in place.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.color_a, &mut self.color_b);
    }

    /// Whether this token, as currently oriented, reads `(first, second)`.
    #[inline]
    pub fn is_oriented(&self, first: Color, second: Color) -> bool {
        self.colors() == (first, second)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}|{})", self.color_a, self.color_b)
    }
}
