use std::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a transaction as the backend sends it. Treated as opaque,
/// only ever displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(id) => write!(f, "{}", id),
            TransactionId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// One row of `GET /api/transactions/last20`. Any other field is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "idTransaction")]
    pub id_transaction: TransactionId,
    #[serde(rename = "balanceAfter")]
    pub balance_after: f64,
}

/// Ledger entry kept by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id_transaction: i64,
    pub description: String,
    pub amount: i64,
    pub balance_before: i64,
    pub balance_after: i64,
    pub deleted: bool,
}

/// What the backend serves for each of the last 20 transactions. Balances
/// stay integral on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub id_transaction: i64,
    pub balance_after: i64,
}

impl From<&Transaction> for TransactionSummary {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id_transaction: transaction.id_transaction,
            balance_after: transaction.balance_after,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: i64,
    //Falls back to the kind's default description
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ignores_unknown_fields() {
        let json = r#"{"idTransaction": 7, "balanceAfter": 1500, "description": "Vklad", "amount": 500}"#;
        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id_transaction, TransactionId::Number(7));
        assert_eq!(record.balance_after, 1500.0);
    }

    #[test]
    fn record_accepts_string_ids_and_negative_balances() {
        let json = r#"{"idTransaction": "tx-42", "balanceAfter": -20.5}"#;
        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id_transaction.to_string(), "tx-42");
        assert_eq!(record.balance_after, -20.5);
    }

    #[test]
    fn record_without_balance_is_rejected() {
        let json = r#"{"idTransaction": 1}"#;
        assert!(serde_json::from_str::<TransactionRecord>(json).is_err());
    }

    #[test]
    fn ledger_entry_summary_keeps_integer_balance() {
        let transaction = Transaction {
            id_transaction: 3,
            description: "Cash deposit".to_string(),
            amount: 200,
            balance_before: 100,
            balance_after: 9_007_199_254_740_993,
            deleted: false,
        };
        let summary = TransactionSummary::from(&transaction);
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"idTransaction":3,"balanceAfter":9007199254740993}"#);
    }

    #[test]
    fn summary_is_readable_as_a_record() {
        let summary = TransactionSummary { id_transaction: 5, balance_after: 1500 };
        let record: TransactionRecord = serde_json::from_value(serde_json::to_value(&summary).unwrap()).unwrap();
        assert_eq!(record.id_transaction, TransactionId::Number(5));
        assert_eq!(record.balance_after, 1500.0);
    }
}
