//! Difficulty levels and their cell-removal policy.

use rand::{Rng, seq::SliceRandom as _};

use crate::board::Board;

/// A difficulty tier, carrying the number of cells erased from a solved
/// board to produce a playable puzzle.
///
/// Easy removes only a handful of cells, so an Easy game is mostly a
/// filled grid.
///
/// # Examples
///
/// ```
/// use ninefold_core::Level;
///
/// assert_eq!(Level::Easy.removals(), 5);
/// assert_eq!(Level::Medium.removals(), 40);
/// assert_eq!(Level::Hard.removals(), 55);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Level {
    /// Removes 5 cells.
    Easy,
    /// Removes 40 cells.
    #[default]
    Medium,
    /// Removes 55 cells.
    Hard,
}

impl Level {
    /// All levels in ascending removal order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of cells this level erases from a solved board.
    #[must_use]
    pub const fn removals(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 40,
            Self::Hard => 55,
        }
    }

    /// Display name of this level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Erases this level's cell count from `board` using the thread RNG.
    pub fn apply(self, board: &mut Board) {
        self.apply_with(board, &mut rand::rng());
    }

    /// Erases this level's cell count from `board`, picking the coordinates
    /// uniformly at random without replacement from `rng`.
    ///
    /// Exactly [`Level::removals`] distinct cells end up empty; no attempt
    /// is made to keep the puzzle uniquely solvable.
    pub fn apply_with<R: Rng + ?Sized>(self, board: &mut Board, rng: &mut R) {
        let mut coords: Vec<(usize, usize)> = (0..Board::SIZE)
            .flat_map(|row| (0..Board::SIZE).map(move |col| (row, col)))
            .collect();
        coords.shuffle(rng);
        for &(row, col) in coords.iter().take(self.removals()) {
            board.clear_cell(row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::board::tests::solved_board;

    fn empty_count(board: &Board) -> usize {
        let mut count = 0;
        for row in 0..9 {
            for col in 0..9 {
                if board.get(row, col) == 0 {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn removal_counts_are_exact() {
        for level in Level::ALL {
            let mut board = solved_board();
            board.apply_level(level);
            assert_eq!(empty_count(&board), level.removals(), "{level:?}");
        }
    }

    #[test]
    fn removal_only_clears_cells() {
        let solution = solved_board();
        let mut board = solution.clone();
        board.apply_level(Level::Hard);
        for row in 0..9 {
            for col in 0..9 {
                let value = board.get(row, col);
                assert!(value == 0 || value == solution.get(row, col));
            }
        }
    }

    #[test]
    fn seeded_removal_is_reproducible() {
        let mut first = solved_board();
        let mut second = solved_board();
        Level::Medium.apply_with(&mut first, &mut Pcg64Mcg::seed_from_u64(42));
        Level::Medium.apply_with(&mut second, &mut Pcg64Mcg::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
