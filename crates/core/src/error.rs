use thiserror::Error;

use crate::model::{BankError, ProfileError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Bank(#[from] BankError),
}
