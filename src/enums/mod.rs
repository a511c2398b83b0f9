pub mod output_format;
pub mod transaction_kind;
