use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid size {0}, must be at least 1")]
    InvalidSize(Coord),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Layout does not match the declared size")]
    LayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GridError>;
