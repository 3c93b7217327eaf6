use std::collections::HashMap;

use crate::api::models::Account;
use crate::display::Displayable;
use crate::error::Result;

pub struct AccountDisplay {
    pub account: Account,
}

impl Displayable for AccountDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &["Email", "ServerLimit", "EmailVerified", "UUID", "Status"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("Email", "Email"),
            ("ServerLimit", "Server Limit"),
            ("EmailVerified", "Email Verified"),
            ("UUID", "UUID"),
            ("Status", "Status"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        vec![HashMap::from([
            ("Email", self.account.email.clone()),
            ("ServerLimit", self.account.server_limit.to_string()),
            ("EmailVerified", self.account.email_verified.to_string()),
            ("UUID", self.account.uuid.clone()),
            ("Status", self.account.status.clone()),
        ])]
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.account)?)
    }
}
