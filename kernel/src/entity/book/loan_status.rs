use serde::{Deserialize, Serialize};

/// Whether a book is on the shelf or lent out. Serialized as the `loaned` flag.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum LoanStatus {
    #[default]
    Available,
    OnLoan,
}

impl LoanStatus {
    pub fn is_loaned(&self) -> bool {
        matches!(self, Self::OnLoan)
    }
}

impl From<bool> for LoanStatus {
    fn from(loaned: bool) -> Self {
        if loaned {
            Self::OnLoan
        } else {
            Self::Available
        }
    }
}

impl From<LoanStatus> for bool {
    fn from(status: LoanStatus) -> Self {
        status.is_loaned()
    }
}

#[cfg(test)]
mod test {
    use super::LoanStatus;

    #[test]
    fn serializes_as_loaned_flag() {
        assert_eq!(
            serde_json::to_string(&LoanStatus::OnLoan).unwrap(),
            "true"
        );
        assert_eq!(
            serde_json::from_str::<LoanStatus>("false").unwrap(),
            LoanStatus::Available
        );
    }
}
