use std::fmt::Display;

use crate::parcheesi::{Color, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Waiting to enter play. Initial state.
    Jail,
    Active,
    /// Finished. Terminal state.
    Inactive,
}

/// Identity of a piece: its color and its number (1 to 4) within that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId {
    pub color: Color,
    pub number: u8,
}

impl Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color, self.number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    status: Status,
    color: Color,
    cell: i8,
}

impl Piece {
    /// Jail row of every color. Not reachable through [`Piece::set_position`].
    pub const JAIL_CELL: i8 = -6;
    pub const FIRST_CELL: i8 = -5;
    pub const HOME_CELL: i8 = 0;
    pub const FINISH_CELL: i8 = 20;

    /// Creates a jailed piece.
    pub fn new(color: Color, number: u8) -> Self {
        Piece {
            id: PieceId { color, number },
            status: Status::Jail,
            color,
            cell: Self::JAIL_CELL,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn number(&self) -> u8 {
        self.id.number
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Current (color, cell) of the piece.
    pub fn position(&self) -> (Color, i8) {
        (self.color, self.cell)
    }

    /// Short label used on the board, e.g. `B3`.
    pub fn abbreviation(&self) -> String {
        self.id.to_string()
    }

    pub fn is_playable_cell(cell: i8) -> bool {
        (Self::FIRST_CELL..=Self::FINISH_CELL).contains(&cell)
    }

    /// Leaves jail and lands on the home cell of the piece's own color.
    pub fn activate(&mut self) -> Result<(), Error> {
        if self.status != Status::Jail {
            return Err(Error::IllegalTransition { piece: self.id, status: self.status });
        }
        self.status = Status::Active;
        self.color = self.id.color;
        self.cell = Self::HOME_CELL;
        tracing::debug!(piece = %self.id, "piece activated");
        Ok(())
    }

    /// Puts the piece on `cell` of `color`.
    ///
    /// The piece may move on to a later color or back to its own color (closing the lap),
    /// never to another earlier color. Landing on the finish cell of its own color
    /// finishes the piece, any other accepted move makes it active.
    /// A finished piece never moves again.
    pub fn set_position(&mut self, color: Color, cell: i8) -> Result<(), Error> {
        if self.status == Status::Inactive {
            return Err(Error::IllegalTransition { piece: self.id, status: self.status });
        }
        if !Self::is_playable_cell(cell) {
            return Err(Error::IllegalCell { cell });
        }
        if color < self.color && color != self.id.color {
            return Err(Error::IllegalLap { from: self.color, to: color });
        }

        self.color = color;
        self.cell = cell;
        self.status = if color == self.id.color && cell == Self::FINISH_CELL {
            Status::Inactive
        } else {
            Status::Active
        };
        tracing::debug!(piece = %self.id, %color, cell, status = ?self.status, "piece moved");
        Ok(())
    }

    /// Moves `steps` cells along the current color.
    pub fn advance(&mut self, steps: i8) -> Result<(), Error> {
        let cell = self.cell.saturating_add(steps);
        self.set_position(self.color, cell)
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}:{}", self.id, self.status, self.color, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_is_jailed() {
        let piece = Piece::new(Color::C, 2);
        assert_eq!(piece.status(), Status::Jail);
        assert_eq!(piece.position(), (Color::C, Piece::JAIL_CELL));
        assert_eq!(piece.abbreviation(), "C2");
    }

    #[test]
    fn test_activate() {
        let mut piece = Piece::new(Color::B, 1);
        piece.activate().unwrap();
        assert_eq!(piece.status(), Status::Active);
        assert_eq!(piece.position(), (Color::B, 0));

        assert_eq!(
            piece.activate(),
            Err(Error::IllegalTransition { piece: piece.id(), status: Status::Active })
        );
    }

    #[test]
    fn test_illegal_cells() {
        for color in Color::ALL {
            let mut piece = Piece::new(Color::A, 1);
            for cell in (i8::MIN..Piece::FIRST_CELL).chain(Piece::FINISH_CELL + 1..=i8::MAX) {
                assert_eq!(piece.set_position(color, cell), Err(Error::IllegalCell { cell }));
            }
            assert_eq!(piece.status(), Status::Jail);
            assert_eq!(piece.position(), (Color::A, Piece::JAIL_CELL));
        }
    }

    #[test]
    fn test_illegal_lap() {
        for (i, &earlier) in Color::ALL.iter().enumerate() {
            for &later in &Color::ALL[i + 1..] {
                // any owner other than `earlier`; returning to the own color is always allowed
                let owner = if earlier == Color::A { Color::B } else { Color::A };
                let mut piece = Piece::new(owner, 1);
                piece.activate().unwrap();
                piece.set_position(later, 3).unwrap();
                for cell in Piece::FIRST_CELL..=Piece::FINISH_CELL {
                    assert_eq!(
                        piece.set_position(earlier, cell),
                        Err(Error::IllegalLap { from: later, to: earlier })
                    );
                }
                assert_eq!(piece.position(), (later, 3));
            }
        }
    }

    #[test]
    fn test_return_to_own_color() {
        let mut piece = Piece::new(Color::A, 4);
        piece.activate().unwrap();
        piece.set_position(Color::C, 10).unwrap();
        piece.set_position(Color::A, 15).unwrap();
        assert_eq!(piece.position(), (Color::A, 15));
        assert_eq!(piece.status(), Status::Active);
    }

    #[test]
    fn test_finish() {
        let mut piece = Piece::new(Color::B, 3);
        piece.activate().unwrap();
        piece.set_position(Color::C, Piece::FINISH_CELL).unwrap();
        assert_eq!(piece.status(), Status::Active);
        piece.set_position(Color::B, Piece::FINISH_CELL).unwrap();
        assert_eq!(piece.status(), Status::Inactive);
    }

    #[test]
    fn test_set_position_from_jail_activates() {
        let mut piece = Piece::new(Color::D, 1);
        piece.set_position(Color::D, Piece::FIRST_CELL).unwrap();
        assert_eq!(piece.status(), Status::Active);
    }

    #[test]
    fn test_advance() {
        let mut piece = Piece::new(Color::A, 1);
        piece.activate().unwrap();
        piece.advance(5).unwrap();
        assert_eq!(piece.position(), (Color::A, 5));
        piece.advance(2).unwrap();
        assert_eq!(piece.position(), (Color::A, 7));
        assert_eq!(piece.advance(14), Err(Error::IllegalCell { cell: 21 }));
        piece.advance(13).unwrap();
        assert_eq!(piece.status(), Status::Inactive);
    }

    #[test]
    fn test_finished_piece_stays_put() {
        let mut piece = Piece::new(Color::A, 1);
        piece.activate().unwrap();
        piece.set_position(Color::A, Piece::FINISH_CELL).unwrap();
        assert_eq!(piece.status(), Status::Inactive);

        let finished = Err(Error::IllegalTransition { piece: piece.id(), status: Status::Inactive });
        assert_eq!(piece.set_position(Color::A, 5), finished);
        assert_eq!(piece.set_position(Color::B, 5), finished);
        assert_eq!(piece.advance(-3), finished);
        assert_eq!(piece.activate(), finished);
        assert_eq!(piece.status(), Status::Inactive);
        assert_eq!(piece.position(), (Color::A, Piece::FINISH_CELL));
    }
}
