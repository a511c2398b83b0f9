#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn description(&self) -> String {
        match &self {
            TransactionKind::Deposit => "Cash deposit".to_string(),
            TransactionKind::Withdrawal => "Cash withdrawal".to_string(),
        }
    }

    /// Signed ledger amount for a positive request amount.
    pub fn signed(&self, amount: i64) -> i64 {
        match &self {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdrawal => -amount,
        }
    }
}
