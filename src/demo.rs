//! Canned walkthroughs printed by the `i`, `l` and `b` modes.

use crate::parcheesi::{Board, Color, Error, Piece, Player};

fn outcome(step: &str, result: Result<(), Error>, state: impl std::fmt::Display) -> String {
    match result {
        Ok(()) => format!("{:<22} {}", step, state),
        Err(e) => format!("{:<22} rejected: {}", step, e),
    }
}

/// Walks one piece through jail, laps and the finish, including two rejected moves.
pub fn piece_transitions() -> String {
    let mut piece = Piece::new(Color::A, 1);
    let mut lines = vec![format!("{:<22} {}", "new", piece)];

    let steps: [(&str, fn(&mut Piece) -> Result<(), Error>); 8] = [
        ("activate", |p| p.activate()),
        ("advance 5", |p| p.advance(5)),
        ("advance 2", |p| p.advance(2)),
        ("set B:3", |p| p.set_position(Color::B, 3)),
        ("set C:10", |p| p.set_position(Color::C, 10)),
        ("set B:4", |p| p.set_position(Color::B, 4)),
        ("set C:25", |p| p.set_position(Color::C, 25)),
        ("set A:20", |p| p.set_position(Color::A, Piece::FINISH_CELL)),
    ];
    for (name, step) in steps {
        let result = step(&mut piece);
        lines.push(outcome(name, result, piece));
    }

    lines.join("\n")
}

/// Activates and moves a player's pieces, including calls the player refuses.
pub fn player_moves() -> String {
    let mut player = Player::new("Demo", Color::B);
    let mut lines = vec![format!("{} ({}) jail: {:?}", player.name(), player.color(), player.pieces_in_jail())];

    let steps: [(&str, fn(&mut Player) -> Result<(), Error>); 7] = [
        ("move 1 to B:4", |p| p.move_piece(1, Color::B, 4)),
        ("activate 1", |p| p.activate_piece(1)),
        ("activate 3", |p| p.activate_piece(3)),
        ("move 1 to C:4", |p| p.move_piece(1, Color::C, 4)),
        ("activate 7", |p| p.activate_piece(7)),
        ("move 3 to B:20", |p| p.move_piece(3, Color::B, Piece::FINISH_CELL)),
        ("move 3 to C:1", |p| p.move_piece(3, Color::C, 1)),
    ];
    for (name, step) in steps {
        let result = step(&mut player);
        lines.push(outcome(name, result, format!("jail: {:?}", player.pieces_in_jail())));
    }

    for piece in player.pieces() {
        lines.push(piece.to_string());
    }
    lines.join("\n")
}

/// A board with, for each color, one piece out on the track, one at home and two in jail.
pub fn board_with_pieces(colors: usize) -> Result<Board, Error> {
    let mut board = Board::new(colors)?;
    for (i, &color) in Color::first(colors).iter().enumerate() {
        let mut player = Player::new(format!("Player {}", i + 1), color);
        player.activate_piece(1)?;
        player.move_piece(1, color, 3 + 2 * i as i8)?;
        player.activate_piece(2)?;
        board.update(player.pieces());
    }
    Ok(board)
}
