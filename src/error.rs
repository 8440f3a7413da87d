use thiserror::Error;

use crate::galois::FieldError;

/// Errors caused by calling the encoder or decoder with invalid input.
///
/// Corrupted data is not an error, see [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Message and parity do not fit into a block of 255 symbols.
    #[error("message of {len} symbols with {nsym} parity symbols does not fit into 255 symbols")]
    MessageTooLong { len: usize, nsym: usize },
    /// A value passed to [`to_symbols`](crate::to_symbols) is not in 0..=255.
    #[error("value {value} at index {index} is not a symbol in 0..=255")]
    InvalidSymbol { index: usize, value: i64 },
    /// More than 255 parity symbols never fit into a block.
    #[error("invalid number of parity symbols: {0}")]
    InvalidParityCount(usize),
    /// A received block is longer than 255 symbols.
    #[error("received block of {0} symbols is longer than 255 symbols")]
    BlockTooLong(usize),
    #[error(transparent)]
    Field(#[from] FieldError),
}
