use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn empty_sequence(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::EmptySequence {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("cannot take {operation} of an empty sequence")]
    EmptySequence { operation: String },

    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
