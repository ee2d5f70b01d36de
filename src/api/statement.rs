use derive_builder::Builder;
use serde::Serialize;

crate::api_resource!(
    /// Account statements. A statement is ordered with [`Statement::create`],
    /// polled with [`Statement::status`] and fetched with [`Statement::result`].
    Statement,
    "statement"
);

/// Body of a statement order. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[builder(setter(into))]
pub struct StatementParams {
    pub account_code: String,
    pub bank_code: String,
    pub date_start: String,
    pub date_end: String,
}

impl StatementParams {
    pub fn builder() -> StatementParamsBuilder {
        StatementParamsBuilder::default()
    }
}

crate::api_endpoint! {
    /// Orders a statement. The answer carries the `request_id` to poll.
    impl Statement;
    fn create(&self; body: StatementParams);
    method: POST;
    endpoint: "";
}

crate::api_endpoint! {
    /// Preparation status of an ordered statement.
    impl Statement;
    fn status(&self, request_id: &str);
    method: GET;
    endpoint: "status/{}";
}

crate::api_endpoint! {
    /// Contents of a prepared statement.
    impl Statement;
    fn result(&self, request_id: &str);
    method: GET;
    endpoint: "result/{}";
}
