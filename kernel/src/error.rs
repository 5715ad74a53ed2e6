use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    InvalidInput,
    NotFound,
    AlreadyLoaned,
    NotLoaned,
    DuplicateTitle,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidInput => write!(f, "Invalid input"),
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::AlreadyLoaned => write!(f, "This book is already loaned"),
            KernelError::NotLoaned => write!(f, "This book is not currently loaned"),
            KernelError::DuplicateTitle => write!(f, "A book with this title already exists"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Explanation meant for the caller, attached to a report next to its [`KernelError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reason(String);

impl Reason {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use error_stack::Report;

    use crate::{KernelError, Reason};

    #[test]
    fn reason_is_recoverable_from_report() {
        let report = Report::new(KernelError::InvalidInput)
            .attach_printable(Reason::new("Title and publisher are required"))
            .attach_printable("while creating a book");

        assert!(matches!(
            report.current_context(),
            KernelError::InvalidInput
        ));
        assert_eq!(
            report.downcast_ref::<Reason>().map(ToString::to_string),
            Some("Title and publisher are required".to_string())
        );
    }
}
