use crate::controller::Intake;
use application::transfer::{LoanBookDto, ReturnBookDto};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LoanRequest {
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReturnRequest {
    title: Option<String>,
}

pub struct LoanTransformer;

impl Intake<LoanRequest> for LoanTransformer {
    type To = LoanBookDto;
    fn emit(&self, LoanRequest { title }: LoanRequest) -> Self::To {
        LoanBookDto {
            title: title.unwrap_or_default(),
        }
    }
}

impl Intake<ReturnRequest> for LoanTransformer {
    type To = ReturnBookDto;
    fn emit(&self, ReturnRequest { title }: ReturnRequest) -> Self::To {
        ReturnBookDto {
            title: title.unwrap_or_default(),
        }
    }
}
