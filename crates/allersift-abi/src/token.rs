use std::fmt;

/// Vocabulary token ID. A newtype keeps token IDs from mixing with the
/// position/sequence `i32`s that travel alongside them in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Token(pub i32);

impl Token {
    #[inline]
    pub fn id(self) -> i32 {
        self.0
    }
}

impl From<i32> for Token {
    #[inline]
    fn from(value: i32) -> Self {
        Token(value)
    }
}

impl From<Token> for i32 {
    #[inline]
    fn from(token: Token) -> i32 {
        token.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
