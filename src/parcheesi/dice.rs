use std::fmt::{Debug, Display};

use rand::{Rng, rngs::ThreadRng};

/// Anything that can produce a die face, a uniform integer in `1..=6`.
pub trait FaceSource {
    fn next_face(&mut self) -> u8;
}

/// Production [`FaceSource`] backed by any [`rand::Rng`].
pub struct RandomFaces<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomFaces<ThreadRng> {
    pub fn new() -> Self {
        RandomFaces { rng: rand::rng() }
    }
}

impl Default for RandomFaces<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomFaces<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomFaces { rng }
    }
}

impl<R: Rng> FaceSource for RandomFaces<R> {
    fn next_face(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}

/// Replays a fixed list of faces, starting over when it runs out.
#[cfg(test)]
pub(crate) struct ScriptedFaces {
    faces: Vec<u8>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedFaces {
    pub fn new(faces: &[u8]) -> Self {
        assert!(!faces.is_empty() && faces.iter().all(|f| (1..=6).contains(f)));
        ScriptedFaces { faces: faces.to_vec(), cursor: 0 }
    }
}

#[cfg(test)]
impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

/// A single die. The face is stored as is, the dot layout is looked up from [`Dice::PATTERNS`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    face: u8,
}

impl Dice {
    /// Dot layouts as 9 bits, read row by row from the most significant bit.
    /// Index 0 is unused.
    pub const PATTERNS: [u16; 7] = [0, 16, 68, 84, 325, 341, 365];

    pub const FRAME: &'static str = "---------";

    /// Faces outside `1..=6` from a broken source are clamped into range and logged.
    pub fn roll(faces: &mut impl FaceSource) -> Self {
        let face = faces.next_face();
        Self::from_face(face).unwrap_or_else(|| {
            tracing::warn!(face, "face source out of range, clamping");
            Dice { face: face.clamp(1, 6) }
        })
    }

    /// Returns `None` for anything outside `1..=6`.
    pub const fn from_face(face: u8) -> Option<Self> {
        match face {
            1..=6 => Some(Dice { face }),
            _ => None,
        }
    }

    pub fn face(&self) -> u8 {
        self.face
    }

    pub fn pattern(&self) -> u16 {
        Self::PATTERNS.get(self.face as usize).copied().unwrap_or(0)
    }

    /// The five text lines of the die: frame, three dot rows, frame.
    pub fn lines(&self) -> [String; 5] {
        let pattern = self.pattern();
        let dot = |bit: u16| if pattern & (1 << bit) != 0 { 'X' } else { ' ' };
        let row = |top_bit: u16| format!("|{}  {}  {}|", dot(top_bit), dot(top_bit - 1), dot(top_bit - 2));
        [
            Self::FRAME.to_string(),
            row(8),
            row(5),
            row(2),
            Self::FRAME.to_string(),
        ]
    }
}

impl Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dice({}): {:09b}", self.face, self.pattern())
    }
}
