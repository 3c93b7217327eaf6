/// Balance service
use crate::api::models::Balance;
use crate::api::ApiClient;
use crate::error::Result;

/// Read-only access to the account balance.
pub struct BalanceService {
    client: ApiClient,
}

impl BalanceService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the current balance. The balance endpoint returns the object
    /// directly, without a singular root wrapper.
    pub async fn get(&self) -> Result<Balance> {
        self.client.get("customers/my/balance").await
    }
}
