#![warn(missing_docs)]
//! Validation of completed sudoku boards
//!
//! ## Overview
//!
//! This crate reads a 9x9 board from comma separated text and checks
//! whether it is a valid sudoku solution, i.e. whether every row, column
//! and 3x3 block contains each digit from 1 to 9 exactly once.
//!
//! ## Example
//!
//! ```
//! use sudoku_validator::Board;
//!
//! let board_text = "\
//! 4,3,5,2,6,9,7,8,1
//! 6,8,2,5,7,1,4,9,3
//! 1,9,7,8,3,4,5,6,2
//! 8,2,6,1,9,5,3,4,7
//! 3,7,4,6,8,2,9,1,5
//! 9,5,1,7,4,3,6,2,8
//! 5,1,9,3,2,6,8,7,4
//! 2,4,8,9,5,7,1,3,6
//! 7,6,3,4,1,8,2,5,9";
//!
//! // Boards can be read from any buffered reader or directly from a
//! // .csv file path via `Board::from_file`.
//! let board = Board::from_reader(board_text.as_bytes()).unwrap();
//! assert!(board.validate().is_ok());
//! ```

mod board;
mod consts;
mod errors;
mod loader;
mod validate;

pub use crate::board::Board;
pub use crate::errors::ValidationError;
