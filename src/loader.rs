//! Reading a board out of comma separated text
//!
//! Rows are lines, columns are comma separated decimal digits. The loader
//! consumes at most 9 rows of 9 values and classifies everything it
//! rejects; it never reports more than one problem per run.
use crate::board::Board;
use crate::consts::{BOARD_LENGTH, N_CELLS};
use crate::errors::ValidationError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

impl Board {
    /// Reads a board from a file path.
    ///
    /// The file name must carry a `.csv` extension (compared case
    /// insensitively) or no extension at all. The extension gate runs
    /// before the existence check, so a misnamed path is reported as
    /// [`ValidationError::InvalidFileExtension`] whether or not the file
    /// exists.
    pub fn from_file(path: &Path) -> Result<Board, ValidationError> {
        check_extension(path)?;
        if !path.exists() {
            return Err(ValidationError::FileDoesNotExist);
        }
        let file = File::open(path).map_err(|_| ValidationError::UnreadableFile)?;
        debug!("reading board from {}", path.display());
        Board::from_reader(BufReader::new(file))
    }

    /// Reads a board from a buffered reader.
    ///
    /// Consumption stops once 9 rows of 9 values are filled in; extra
    /// tokens on a line and extra lines are ignored. A row with fewer than
    /// 8 tokens, or input with fewer than 8 rows, is rejected as
    /// [`ValidationError::InvalidBoardSize`].
    pub fn from_reader<T: BufRead>(reader: T) -> Result<Board, ValidationError> {
        let mut cells = [0; N_CELLS];
        let mut rows = 0;

        for line in reader.lines().take(BOARD_LENGTH) {
            let line = line.map_err(|_| ValidationError::UnreadableFile)?;
            let mut cols = 0;

            for token in line.trim().split(',').take(BOARD_LENGTH) {
                let number = token
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| ValidationError::InvalidCharacters)?;
                if !(1..=9).contains(&number) {
                    return Err(ValidationError::OutOfRangeNumber);
                }
                cells[rows * BOARD_LENGTH + cols] = number as u8;
                cols += 1;
            }

            // A row one token short passes here. The zero left in its last
            // cell fails the solution check instead.
            if cols < BOARD_LENGTH - 1 {
                return Err(ValidationError::InvalidBoardSize);
            }
            rows += 1;
        }

        // Same boundary for the row count.
        if rows < BOARD_LENGTH - 1 {
            return Err(ValidationError::InvalidBoardSize);
        }
        debug!("loaded {} rows", rows);
        Ok(Board(cells))
    }
}

// The gate mirrors the command line contract: only the suffix after the
// last '.' of the final path component counts, and a name without a '.'
// is let through.
fn check_extension(path: &Path) -> Result<(), ValidationError> {
    let name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
    match name.rfind('.') {
        Some(pos) if !name[pos + 1..].trim().eq_ignore_ascii_case("csv") => {
            Err(ValidationError::InvalidFileExtension)
        }
        _ => Ok(()),
    }
}
