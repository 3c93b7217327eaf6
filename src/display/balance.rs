use std::collections::HashMap;

use crate::api::models::Balance;
use crate::display::Displayable;
use crate::error::Result;

pub struct BalanceDisplay {
    pub balance: Balance,
}

impl Displayable for BalanceDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &[
            "MonthToDateBalance",
            "AccountBalance",
            "MonthToDateUsage",
            "GeneratedAt",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("MonthToDateBalance", "Month-to-date Balance"),
            ("AccountBalance", "Account Balance"),
            ("MonthToDateUsage", "Month-to-date Usage"),
            ("GeneratedAt", "Generated At"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        vec![HashMap::from([
            ("MonthToDateBalance", self.balance.month_to_date_balance.clone()),
            ("AccountBalance", self.balance.account_balance.clone()),
            ("MonthToDateUsage", self.balance.month_to_date_usage.clone()),
            ("GeneratedAt", self.balance.generated_at.to_rfc3339()),
        ])]
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.balance)?)
    }
}
