use crate::parcheesi::{Color, Error, FaceSource, Piece, Status, Throwing};

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    color: Color,
    pieces: [Piece; 4],
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
            pieces: [1, 2, 3, 4].map(|number| Piece::new(color, number)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pieces(&self) -> &[Piece; 4] {
        &self.pieces
    }

    pub fn piece(&self, number: u8) -> Result<&Piece, Error> {
        self.pieces
            .iter()
            .find(|piece| piece.number() == number)
            .ok_or(Error::InvalidPiece { number })
    }

    fn piece_mut(&mut self, number: u8) -> Result<&mut Piece, Error> {
        self.pieces
            .iter_mut()
            .find(|piece| piece.number() == number)
            .ok_or(Error::InvalidPiece { number })
    }

    pub fn throwing(&self, faces: &mut impl FaceSource) -> Throwing {
        Throwing::pair(faces)
    }

    pub fn activate_piece(&mut self, number: u8) -> Result<(), Error> {
        self.piece_mut(number)?.activate()
    }

    /// Moves an active piece. Jailed and finished pieces cannot be moved.
    pub fn move_piece(&mut self, number: u8, color: Color, cell: i8) -> Result<(), Error> {
        let piece = self.piece_mut(number)?;
        match piece.status() {
            Status::Active => piece.set_position(color, cell),
            status => Err(Error::IllegalTransition { piece: piece.id(), status }),
        }
    }

    /// Numbers of the jailed pieces, lowest first.
    pub fn pieces_in_jail(&self) -> Vec<u8> {
        self.pieces
            .iter()
            .filter(|piece| piece.status() == Status::Jail)
            .map(Piece::number)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parcheesi::ScriptedFaces;

    #[test]
    fn test_new_player() {
        let player = Player::new("Ana", Color::B);
        assert_eq!(player.name(), "Ana");
        assert_eq!(player.color(), Color::B);
        assert_eq!(player.pieces_in_jail(), vec![1, 2, 3, 4]);
        assert!(player.pieces().iter().all(|p| p.id().color == Color::B));
    }

    #[test]
    fn test_invalid_piece() {
        let mut player = Player::new("Ana", Color::A);
        assert_eq!(player.activate_piece(0), Err(Error::InvalidPiece { number: 0 }));
        assert_eq!(player.activate_piece(5), Err(Error::InvalidPiece { number: 5 }));
        assert_eq!(player.move_piece(9, Color::A, 3), Err(Error::InvalidPiece { number: 9 }));
        assert!(player.piece(4).is_ok());
    }

    #[test]
    fn test_activate_and_move() {
        let mut player = Player::new("Ana", Color::A);
        let id = player.piece(2).unwrap().id();
        assert_eq!(
            player.move_piece(2, Color::A, 3),
            Err(Error::IllegalTransition { piece: id, status: Status::Jail })
        );

        player.activate_piece(2).unwrap();
        assert_eq!(player.pieces_in_jail(), vec![1, 3, 4]);
        player.move_piece(2, Color::B, 4).unwrap();
        assert_eq!(player.piece(2).unwrap().position(), (Color::B, 4));

        assert_eq!(
            player.move_piece(2, Color::A, 30),
            Err(Error::IllegalCell { cell: 30 })
        );
        player.move_piece(2, Color::A, Piece::FINISH_CELL).unwrap();
        assert_eq!(player.piece(2).unwrap().status(), Status::Inactive);
        assert_eq!(
            player.move_piece(2, Color::A, 3),
            Err(Error::IllegalTransition { piece: id, status: Status::Inactive })
        );
    }

    #[test]
    fn test_throwing_uses_two_dice() {
        let player = Player::new("Ana", Color::C);
        let mut faces = ScriptedFaces::new(&[5, 5]);
        let throwing = player.throwing(&mut faces);
        assert_eq!(throwing.dice().len(), 2);
        assert!(throwing.is_double());
    }
}
