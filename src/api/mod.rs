mod account;
mod statement;

pub use account::Account;
pub use statement::{Statement, StatementParams, StatementParamsBuilder, StatementParamsBuilderError};
