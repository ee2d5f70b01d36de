crate::api_resource!(
    /// Accounts of the organization the token was issued for.
    Account,
    "account"
);

crate::api_endpoint! {
    /// Lists the organization's accounts.
    impl Account;
    fn list(&self);
    method: GET;
    endpoint: "list";
}

crate::api_endpoint! {
    /// Current balances of the organization's accounts.
    impl Account;
    fn balance(&self);
    method: GET;
    endpoint: "balance";
}
