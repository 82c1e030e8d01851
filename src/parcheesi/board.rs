use std::{fmt::Display, ops::RangeInclusive};

use hashbrown::HashMap;

use crate::parcheesi::{Color, Error, Piece, PieceId, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    Jail,
    Home,
    Safe,
    Finish,
    Cell,
}

impl CellRole {
    pub fn letter(&self) -> char {
        match self {
            CellRole::Jail => 'J',
            CellRole::Home => 'H',
            CellRole::Safe => 'S',
            CellRole::Finish => 'F',
            CellRole::Cell => 'C',
        }
    }

    /// Eight character filler shown when nobody stands on the cell.
    pub fn label(&self) -> &'static str {
        match self {
            CellRole::Jail => "0 0  0 0",
            CellRole::Home => "--HOME--",
            CellRole::Safe => "--SAFE--",
            CellRole::Finish => "-FINISH-",
            CellRole::Cell => "        ",
        }
    }
}

/// The tracks of every color in play, plus the last known state of each piece.
/// Pieces are copied in with [`Board::place`] / [`Board::update`]; the board never moves them itself.
#[derive(Debug, Clone)]
pub struct Board {
    colors: Vec<Color>,
    pieces: HashMap<PieceId, Piece>,
}

impl Board {
    /// Every row of a track, jail first.
    pub const CELLS: RangeInclusive<i8> = Piece::JAIL_CELL..=Piece::FINISH_CELL;

    const SAFE_CELLS: [i8; 3] = [Piece::FIRST_CELL, 7, 12];

    const MARGIN: &'static str = "     ";

    /// Width of the content part of a cell.
    const CONTENT_WIDTH: usize = 8;

    pub fn new(colors: usize) -> Result<Self, Error> {
        if !(1..=Color::ALL.len()).contains(&colors) {
            return Err(Error::InvalidColorCount { colors });
        }
        Ok(Board {
            colors: Color::first(colors).to_vec(),
            pieces: HashMap::new(),
        })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn cell_role(cell: i8) -> CellRole {
        match cell {
            Piece::JAIL_CELL => CellRole::Jail,
            Piece::HOME_CELL => CellRole::Home,
            Piece::FINISH_CELL => CellRole::Finish,
            c if Self::SAFE_CELLS.contains(&c) => CellRole::Safe,
            _ => CellRole::Cell,
        }
    }

    pub fn place(&mut self, piece: Piece) {
        if !self.colors.contains(&piece.id().color) {
            tracing::warn!(piece = %piece.id(), "placing a piece whose color is not on the board");
        }
        self.pieces.insert(piece.id(), piece);
    }

    pub fn update<'a>(&mut self, pieces: impl IntoIterator<Item = &'a Piece>) {
        for piece in pieces {
            self.place(*piece);
        }
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Pieces standing on `cell` of `color`, in (color, number) order.
    /// Jailed pieces always sit in the jail of their own color.
    pub fn occupants(&self, color: Color, cell: i8) -> Vec<PieceId> {
        let mut ids: Vec<PieceId> = self
            .pieces
            .values()
            .filter(|piece| match piece.status() {
                Status::Jail => piece.id().color == color && cell == Piece::JAIL_CELL,
                _ => piece.position() == (color, cell),
            })
            .map(Piece::id)
            .collect();
        ids.sort();
        ids
    }

    /// Abbreviations of the occupants, cut down to the first few plus a `+N` count
    /// when they do not all fit in a cell.
    fn occupant_label(occupants: &[PieceId]) -> String {
        let names: Vec<String> = occupants.iter().map(PieceId::to_string).collect();
        let all = names.concat();
        if all.len() <= Self::CONTENT_WIDTH {
            return all;
        }

        let mut label = String::new();
        let mut shown = 0;
        for name in &names {
            let hidden = format!("+{}", names.len() - shown - 1);
            if label.len() + name.len() + hidden.len() > Self::CONTENT_WIDTH {
                break;
            }
            label.push_str(name);
            shown += 1;
        }
        format!("{}+{}", label, names.len() - shown)
    }

    fn render_cell(&self, color: Color, cell: i8) -> String {
        let role = Self::cell_role(cell);
        let occupants = self.occupants(color, cell);
        let content = if occupants.is_empty() {
            role.label().to_string()
        } else {
            format!("{:^width$}", Self::occupant_label(&occupants), width = Self::CONTENT_WIDTH)
        };
        format!("|{:>3}|{}|{}|", cell, role.letter(), content)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in Self::CELLS {
            for &color in &self.colors {
                write!(f, "{}{}", Self::MARGIN, self.render_cell(color, cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
