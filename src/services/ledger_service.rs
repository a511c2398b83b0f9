use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use crate::enums::transaction_kind::TransactionKind;
use crate::errors::LedgerError;
use crate::models::transaction::{Transaction, TransactionSummary};

pub const LAST_TRANSACTIONS_WINDOW: usize = 20;

const DELETED_PREFIX: &str = "(deleted) - ";

/// In-memory cash register ledger. Every entry records the balance before
/// and after it; the newest entry holds the current balance.
#[derive(Clone, Default)]
pub struct LedgerService {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current_balance(&self) -> i64 {
        let transactions = self.transactions.lock().await;
        transactions.last().map(|t| t.balance_after).unwrap_or(0)
    }

    pub async fn deposit(&self, amount: i64, description: Option<String>) -> Result<Transaction, LedgerError> {
        self.record(TransactionKind::Deposit, amount, description).await
    }

    pub async fn withdraw(&self, amount: i64, description: Option<String>) -> Result<Transaction, LedgerError> {
        self.record(TransactionKind::Withdrawal, amount, description).await
    }

    async fn record(
        &self,
        kind: TransactionKind,
        amount: i64,
        description: Option<String>,
    ) -> Result<Transaction, LedgerError> {
        if amount <= 0 {
            warn!("Rejected {:?} of {}", kind, amount);
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut transactions = self.transactions.lock().await;
        let balance_before = transactions.last().map(|t| t.balance_after).unwrap_or(0);
        if kind == TransactionKind::Withdrawal && balance_before < amount {
            warn!("Rejected withdrawal of {} with balance {}", amount, balance_before);
            return Err(LedgerError::InsufficientFunds {
                balance: balance_before,
                requested: amount,
            });
        }

        let signed = kind.signed(amount);
        let transaction = Transaction {
            id_transaction: next_id(&transactions),
            description: description.unwrap_or_else(|| kind.description()),
            amount: signed,
            balance_before,
            balance_after: checked_balance(balance_before, signed)?,
            deleted: false,
        };
        transactions.push(transaction.clone());
        info!(
            "Recorded transaction {} ({}), balance {} -> {}",
            transaction.id_transaction, signed, balance_before, transaction.balance_after
        );
        Ok(transaction)
    }

    pub async fn get(&self, id: i64) -> Result<Transaction, LedgerError> {
        let transactions = self.transactions.lock().await;
        transactions
            .iter()
            .find(|t| t.id_transaction == id)
            .cloned()
            .ok_or(LedgerError::NotFound(id))
    }

    /// Reverses transaction `id`: the entry is flagged deleted and a
    /// negating entry, itself flagged deleted, is appended. Returns the
    /// negating entry. The balance may not go below zero.
    pub async fn delete(&self, id: i64) -> Result<Transaction, LedgerError> {
        let mut transactions = self.transactions.lock().await;
        let balance_before = transactions.last().map(|t| t.balance_after).unwrap_or(0);
        let index = transactions
            .iter()
            .position(|t| t.id_transaction == id)
            .ok_or(LedgerError::NotFound(id))?;

        let target = &transactions[index];
        if target.deleted {
            warn!("Transaction {} is already deleted", id);
            return Err(LedgerError::AlreadyDeleted(id));
        }
        let reversal_amount = target
            .amount
            .checked_neg()
            .ok_or(LedgerError::BalanceOverflow { balance: balance_before, change: target.amount })?;
        let balance_after = checked_balance(balance_before, reversal_amount)?;
        if balance_after < 0 {
            warn!("Reversing transaction {} would leave balance {}", id, balance_after);
            return Err(LedgerError::InsufficientFunds {
                balance: balance_before,
                requested: target.amount,
            });
        }

        let original_description = target.description.clone();
        let reversal = Transaction {
            id_transaction: next_id(&transactions),
            description: format!("Reversal of transaction {} - {}", id, original_description),
            amount: reversal_amount,
            balance_before,
            balance_after,
            deleted: true,
        };

        let target = &mut transactions[index];
        target.deleted = true;
        target.description = format!("{}{}", DELETED_PREFIX, original_description);
        transactions.push(reversal.clone());
        info!(
            "Reversed transaction {} with {}, balance {} -> {}",
            id, reversal.id_transaction, balance_before, balance_after
        );
        Ok(reversal)
    }

    /// The newest 20 transactions, oldest first.
    pub async fn last20(&self) -> Vec<TransactionSummary> {
        let transactions = self.transactions.lock().await;
        let start = transactions.len().saturating_sub(LAST_TRANSACTIONS_WINDOW);
        transactions[start..].iter().map(TransactionSummary::from).collect()
    }
}

fn next_id(transactions: &[Transaction]) -> i64 {
    transactions.last().map(|t| t.id_transaction + 1).unwrap_or(1)
}

fn checked_balance(balance: i64, change: i64) -> Result<i64, LedgerError> {
    balance
        .checked_add(change)
        .ok_or(LedgerError::BalanceOverflow { balance, change })
}
