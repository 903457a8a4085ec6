//! The solution check
//!
//! A board is a valid solution iff each of its 27 houses (9 rows, 9
//! columns, 9 blocks) contains the digits 1 through 9 exactly once.
use crate::board::Board;
use crate::consts::BOARD_LENGTH;
use crate::errors::ValidationError;
use log::debug;

impl Board {
    /// Checks whether the board is a valid sudoku solution.
    ///
    /// The check is read only; validating the same board twice gives the
    /// same verdict.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for i in 0..BOARD_LENGTH {
            if !(is_permutation(self.house_row(i))
                && is_permutation(self.house_column(i))
                && is_permutation(self.house_block(i)))
            {
                debug!("house {} fails the permutation check", i);
                return Err(ValidationError::InvalidSolution);
            }
        }
        Ok(())
    }

    fn house_row(&self, i: usize) -> [u8; 9] {
        let mut house = [0; 9];
        house.copy_from_slice(&self.0[i * BOARD_LENGTH..][..BOARD_LENGTH]);
        house
    }

    fn house_column(&self, i: usize) -> [u8; 9] {
        let mut house = [0; 9];
        for (j, slot) in house.iter_mut().enumerate() {
            *slot = self.0[j * BOARD_LENGTH + i];
        }
        house
    }

    // Block i sits at block row i/3, block column i%3; j walks the block
    // row major, so the cell row is (i/3)*3 + j/3 and the cell column is
    // (i*3) % 9 + j%3.
    fn house_block(&self, i: usize) -> [u8; 9] {
        let mut house = [0; 9];
        for (j, slot) in house.iter_mut().enumerate() {
            *slot = self.0[((i / 3) * 3 + j / 3) * BOARD_LENGTH + (i * 3) % BOARD_LENGTH + j % 3];
        }
        house
    }
}

fn is_permutation(mut house: [u8; 9]) -> bool {
    house.sort_unstable();
    house.iter().zip(1u8..=9).all(|(&digit, i)| digit == i)
}
