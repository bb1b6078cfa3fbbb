//! Type definitions for Safe transactions

mod operation;
mod record;
mod signed;

pub use operation::Operation;
pub use record::TransactionRecord;
pub use signed::SignedTransaction;
