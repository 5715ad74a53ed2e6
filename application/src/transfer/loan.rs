pub struct LoanBookDto {
    pub title: String,
}

pub struct ReturnBookDto {
    pub title: String,
}
