#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("Unknown aspect: {0}")]
    UnknownAspect(String),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    #[error("Unknown case: {0}")]
    UnknownCase(String),

    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(#[from] serde_json::Error),
}
