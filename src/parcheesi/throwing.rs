use std::fmt::Display;

use crate::parcheesi::{Dice, FaceSource};

/// A group of dice thrown together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throwing {
    dice: Vec<Dice>,
}

impl Throwing {
    pub const DEFAULT_DICE: usize = 2;

    const GAP: &'static str = "     ";

    pub fn roll(faces: &mut impl FaceSource, count: usize) -> Self {
        Throwing {
            dice: (0..count).map(|_| Dice::roll(faces)).collect(),
        }
    }

    pub fn pair(faces: &mut impl FaceSource) -> Self {
        Self::roll(faces, Self::DEFAULT_DICE)
    }

    pub fn from_dice(dice: Vec<Dice>) -> Self {
        Throwing { dice }
    }

    pub fn dice(&self) -> &[Dice] {
        &self.dice
    }

    pub fn sum(&self) -> u32 {
        self.dice.iter().map(|d| d.face() as u32).sum()
    }

    /// True when the first two dice show the same face.
    pub fn is_double(&self) -> bool {
        match self.dice.as_slice() {
            [a, b, ..] => a.face() == b.face(),
            _ => false,
        }
    }

    /// The shared face of a double.
    pub fn double_face(&self) -> Option<u8> {
        self.is_double().then(|| self.dice[0].face())
    }
}

impl Display for Throwing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.dice.is_empty() {
            return Ok(());
        }
        let rendered: Vec<[String; 5]> = self.dice.iter().map(Dice::lines).collect();
        for row in 0..5 {
            let line = rendered
                .iter()
                .map(|lines| lines[row].as_str())
                .collect::<Vec<_>>()
                .join(Self::GAP);
            writeln!(f, "{}{}", Self::GAP, line)?;
        }
        Ok(())
    }
}
