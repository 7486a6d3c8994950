//! Concrete renderer variants, one per clock model

mod board;
mod matrix;
mod quad;

pub use board::WordBoardVariant;
pub use matrix::MatrixVariant;
pub use quad::QuadDigitVariant;
