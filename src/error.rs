use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// An acronym was empty or contained a separator character.
    #[error("acronym '{0}' is invalid")]
    InvalidAcronym(String),
}

pub type Result<T> = std::result::Result<T, CaseError>;
