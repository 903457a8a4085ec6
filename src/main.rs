use std::env;
use std::path::Path;
use std::process::ExitCode;

use log::debug;
use sudoku_validator::{Board, ValidationError};

fn main() -> ExitCode {
    env_logger::init();

    match run(env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(path_arg: Option<String>) -> Result<(), ValidationError> {
    let path_arg = path_arg.ok_or(ValidationError::MissingFilePath)?;
    let board = Board::from_file(Path::new(path_arg.trim()))?;
    debug!("board loaded:\n{}", board);
    board.validate()
}
