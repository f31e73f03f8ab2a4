//! Deterministic die source that replays a fixed script of faces.

use crate::{DIE_FACES, DieSource};

/// Replays a fixed sequence of faces, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    pos: usize,
}

impl ScriptedDice {
    /// Create a source from a list of faces.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty or contains a value outside `1..=6`.
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(!faces.is_empty(), "scripted dice need at least one face");
        if let Some(bad) = faces.iter().find(|f| !(1..=DIE_FACES).contains(*f)) {
            panic!("scripted face {bad} is not a valid die face");
        }
        Self { faces, pos: 0 }
    }

    /// One trial per pair: the first die of each pair, then the second.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        Self::new(pairs.iter().flat_map(|&(a, b)| [a, b]).collect())
    }

    /// All 36 ordered pairs, `(1,1), (1,2), ... (6,6)`, each exactly once.
    pub fn all_pairs() -> Self {
        let pairs: Vec<(u8, u8)> = (1..=DIE_FACES)
            .flat_map(|a| (1..=DIE_FACES).map(move |b| (a, b)))
            .collect();
        Self::from_pairs(&pairs)
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.pos];
        self.pos = (self.pos + 1) % self.faces.len();
        face
    }
}
