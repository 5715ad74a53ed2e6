mod id;
mod loan_status;
mod publisher;
mod title;

pub use self::{id::*, loan_status::*, publisher::*, title::*};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use error_stack::Report;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    publisher: BookPublisher,
    loan_status: LoanStatus,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        publisher: BookPublisher,
        loan_status: LoanStatus,
    ) -> Self {
        Self {
            id,
            title,
            publisher,
            loan_status,
        }
    }

    /// Replaces the descriptive fields. Identity and loan status are kept.
    pub fn revise(mut self, title: BookTitle, publisher: BookPublisher) -> Self {
        self.substitute(|book| {
            *book.title = title;
            *book.publisher = publisher;
        });
        self
    }

    pub fn loan(mut self) -> error_stack::Result<Self, KernelError> {
        if self.loan_status.is_loaned() {
            return Err(Report::new(KernelError::AlreadyLoaned)
                .attach_printable(format!("book {} is already on loan", self.id.as_ref())));
        }
        self.substitute(|book| *book.loan_status = LoanStatus::OnLoan);
        Ok(self)
    }

    pub fn return_loan(mut self) -> error_stack::Result<Self, KernelError> {
        if !self.loan_status.is_loaned() {
            return Err(Report::new(KernelError::NotLoaned)
                .attach_printable(format!("book {} is not on loan", self.id.as_ref())));
        }
        self.substitute(|book| *book.loan_status = LoanStatus::Available);
        Ok(self)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{Book, BookId, BookPublisher, BookTitle, LoanStatus};
    use crate::KernelError;

    fn dune() -> Book {
        Book::new(
            BookId::new(1),
            BookTitle::new("Dune"),
            BookPublisher::new("Ace"),
            LoanStatus::Available,
        )
    }

    #[test]
    fn loan_then_return() -> error_stack::Result<(), KernelError> {
        let book = dune().loan()?;
        assert_eq!(book.loan_status(), &LoanStatus::OnLoan);

        let book = book.return_loan()?;
        assert_eq!(book.loan_status(), &LoanStatus::Available);
        Ok(())
    }

    #[test]
    fn loan_twice_is_rejected() -> error_stack::Result<(), KernelError> {
        let report = dune().loan()?.loan().unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::AlreadyLoaned
        ));
        Ok(())
    }

    #[test]
    fn return_available_is_rejected() {
        let report = dune().return_loan().unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotLoaned));
    }

    #[test]
    fn revise_keeps_identity_and_loan() -> error_stack::Result<(), KernelError> {
        let book = dune()
            .loan()?
            .revise(BookTitle::new("Dune Messiah"), BookPublisher::new("Putnam"));

        assert_eq!(book.id(), &BookId::new(1));
        assert_eq!(book.title(), &BookTitle::new("Dune Messiah"));
        assert_eq!(book.publisher(), &BookPublisher::new("Putnam"));
        assert_eq!(book.loan_status(), &LoanStatus::OnLoan);
        Ok(())
    }
}
