pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SplitError {
    #[display("block already has children")]
    AlreadySplit,
    #[display("split ratio must lie strictly between 0 and 1")]
    RatioOutOfRange,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("only leaf blocks can be painted")]
pub struct PaintError;
