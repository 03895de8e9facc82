use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("No rounds found: the document contains no \"Result of Round #N\" marker")]
    NoRoundsFound,
    #[error("Rounds detected but no participant lines parsed")]
    RoundsWithoutNames,
    #[error("Invalid bottom count {0}: must be a whole number 1, 2, 3, ...")]
    InvalidBottomCount(i64),
}

pub type Result<T> = std::result::Result<T, ParseError>;
