/// Account service
use serde::Deserialize;

use crate::api::models::Account;
use crate::api::ApiClient;
use crate::error::Result;

#[derive(Deserialize)]
struct AccountRoot {
    account: Account,
}

/// Read-only access to the authenticated account.
pub struct AccountService {
    client: ApiClient,
}

impl AccountService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the account behind the current token.
    pub async fn get(&self) -> Result<Account> {
        let root: AccountRoot = self.client.get("account").await?;
        Ok(root.account)
    }
}
