mod color;
pub use color::Color;

mod dice;
pub use dice::Dice;
pub use dice::FaceSource;
pub use dice::RandomFaces;

mod throwing;
pub use throwing::Throwing;

mod turn;
pub use turn::Turn;

mod piece;
pub use piece::Piece;
pub use piece::PieceId;
pub use piece::Status;

mod board;
pub use board::Board;
pub use board::CellRole;

mod player;
pub use player::Player;

mod game;
pub use game::Game;
pub use game::GameConfig;
pub use game::TurnReport;

mod error;
pub use error::Error;

#[cfg(test)]
pub(crate) use dice::ScriptedFaces;
