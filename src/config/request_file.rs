use crate::domain::model::TicketTypeRequest;
use crate::utils::error::{Result, TicketError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A purchase request stored as TOML:
///
/// ```toml
/// account_id = 1
///
/// [[tickets]]
/// type = "ADULT"
/// count = 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequestFile {
    pub account_id: Option<i64>,
    #[serde(default)]
    pub tickets: Vec<TicketTypeRequest>,
}

impl PurchaseRequestFile {
    /// 從 TOML 檔案載入購票請求
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TicketError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析購票請求
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TicketError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ACCOUNT_ID})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TicketError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// A missing `account_id` is passed on as 0 so the purchase rules reject it
    /// the same way as any other non-positive id.
    pub fn account_id(&self) -> i64 {
        self.account_id.unwrap_or_default()
    }
}
