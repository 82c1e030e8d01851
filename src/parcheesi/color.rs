use std::fmt::Display;

/// Track colors, named by the letter printed on the board.
/// The derived ordering is the lap order: a piece may only move on to a later color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    A,
    B,
    C,
    D,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::A, Color::B, Color::C, Color::D];

    /// The first `count` colors in lap order. Counts above 4 are truncated.
    pub fn first(count: usize) -> &'static [Color] {
        let all: &'static [Color] = &Self::ALL;
        &all[..count.min(all.len())]
    }

    pub fn letter(&self) -> char {
        match self {
            Color::A => 'A',
            Color::B => 'B',
            Color::C => 'C',
            Color::D => 'D',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
