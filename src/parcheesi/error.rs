use crate::parcheesi::{Color, PieceId, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The player owns no piece with this number.
    InvalidPiece { number: u8 },
    /// The piece's status does not allow the requested operation.
    IllegalTransition { piece: PieceId, status: Status },
    /// Moving back to an earlier color.
    IllegalLap { from: Color, to: Color },
    IllegalCell { cell: i8 },
    InvalidColorCount { colors: usize },
    /// No player sits at this index of the game.
    InvalidPlayer { index: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPiece { number } => write!(f, "piece {} does not exist", number),
            Error::IllegalTransition { piece, status } => {
                write!(f, "piece {} cannot do that while {:?}", piece, status)
            }
            Error::IllegalLap { from, to } => {
                write!(f, "cannot lap back from color {} to color {}", from, to)
            }
            Error::IllegalCell { cell } => write!(f, "cell {} is off the track", cell),
            Error::InvalidColorCount { colors } => {
                write!(f, "a board needs 1 to 4 colors, got {}", colors)
            }
            Error::InvalidPlayer { index } => write!(f, "no player at seat {}", index),
        }
    }
}

impl std::error::Error for Error {}
