//! Errors that may be encountered when loading or validating a board

/// Classification of every way a validation run can fail.
///
/// Exactly one classification accompanies a failure. The `Display` impl
/// carries the diagnostic line the command line tool prints, so callers
/// match on the variant and the reporting boundary formats it.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ValidationError {
    /// No file path argument was supplied.
    #[error("File path is missing")]
    MissingFilePath,
    /// The path does not point to an existing file.
    #[error("File does not exist")]
    FileDoesNotExist,
    /// The file could not be opened or read.
    #[error("Can not read file")]
    UnreadableFile,
    /// The file name carries an extension other than `.csv`.
    #[error("Invalid file extension, only .CSV files are valid")]
    InvalidFileExtension,
    /// A cell token could not be parsed as a base-10 integer.
    #[error("Board has invalid characters")]
    InvalidCharacters,
    /// A cell value lies outside `1..=9`.
    #[error("Only numbers from 1 to 9 are valid")]
    OutOfRangeNumber,
    /// The input ran out before enough rows or columns were seen.
    #[error("Board has invalid size")]
    InvalidBoardSize,
    /// A row, column or block is not a permutation of `1..=9`.
    #[error("Invalid solution")]
    InvalidSolution,
}
