pub mod request_file;

#[cfg(feature = "cli")]
use crate::domain::model::TicketTypeRequest;
#[cfg(feature = "cli")]
use crate::utils::error::{Result, TicketError};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use request_file::PurchaseRequestFile;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ticket-service")]
#[command(about = "Validate, price and purchase tickets")]
pub struct CliConfig {
    /// Purchasing account; overrides `account_id` from a request file
    #[arg(long, allow_hyphen_values = true)]
    pub account_id: Option<i64>,

    /// Ticket entry as TYPE=COUNT, e.g. ADULT=2 (repeatable)
    #[arg(long = "ticket", value_name = "TYPE=COUNT")]
    pub tickets: Vec<TicketTypeRequest>,

    /// Path to a TOML purchase request
    #[arg(long)]
    pub request_file: Option<String>,

    /// Validate and price only; no payment or reservation is made
    #[arg(long)]
    pub dry_run: bool,

    /// Print the purchase summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Resolves the account id and ticket entries from the command line or the request file.
    pub fn purchase_request(&self) -> Result<(i64, Vec<TicketTypeRequest>)> {
        match &self.request_file {
            Some(path) => {
                let file = PurchaseRequestFile::from_file(path)?;
                let account_id = self.account_id.unwrap_or_else(|| file.account_id());
                Ok((account_id, file.tickets))
            }
            None => {
                let account_id = validation::validate_required_field("account_id", &self.account_id)?;
                Ok((*account_id, self.tickets.clone()))
            }
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.request_file, self.tickets.is_empty()) {
            (Some(_), false) => Err(TicketError::ConfigError {
                message: "Use either --ticket or --request-file, not both".to_string(),
            }),
            (None, true) => Err(TicketError::ConfigError {
                message: "No tickets requested: pass --ticket TYPE=COUNT or --request-file".to_string(),
            }),
            (Some(path), true) => {
                validation::validate_path("request_file", path)?;
                validation::validate_file_extension("request_file", path, &["toml"])
            }
            (None, false) => validation::validate_required_field("account_id", &self.account_id).map(|_| ()),
        }
    }
}
