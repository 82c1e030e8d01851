use std::fmt::Display;

use crate::parcheesi::{FaceSource, Throwing};

/// One player's turn: a pair of dice is thrown again after every double, at most [`Turn::MAX`] times in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    throwings: Vec<Throwing>,
}

impl Turn {
    pub const MAX: usize = 3;

    pub fn take(faces: &mut impl FaceSource) -> Self {
        let mut throwings = Vec::with_capacity(Self::MAX);
        loop {
            let throwing = Throwing::pair(faces);
            let repeat = throwing.is_double();
            throwings.push(throwing);
            if !repeat || throwings.len() >= Self::MAX {
                break;
            }
        }
        tracing::debug!(throws = throwings.len(), "turn finished");
        Turn { throwings }
    }

    pub fn throwings(&self) -> &[Throwing] {
        &self.throwings
    }

    pub fn len(&self) -> usize {
        self.throwings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.throwings.is_empty()
    }
}

impl Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, throwing) in self.throwings.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", throwing)?;
        }
        Ok(())
    }
}
