use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("{message}")]
    InvalidPurchase { message: String },

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Failures reported by a payment service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Payment declined for account {account_id}: {reason}")]
    Declined { account_id: i64, reason: String },

    #[error("Payment service unavailable: {message}")]
    Unavailable { message: String },
}

/// Failures reported by a seat reservation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Unable to allocate {requested} seats for account {account_id}")]
    SeatsUnavailable { account_id: i64, requested: u32 },

    #[error("Reservation service unavailable: {message}")]
    Unavailable { message: String },
}

impl TicketError {
    pub fn invalid_purchase(message: impl Into<String>) -> Self {
        TicketError::InvalidPurchase {
            message: message.into(),
        }
    }

    pub fn is_invalid_purchase(&self) -> bool {
        matches!(self, TicketError::InvalidPurchase { .. })
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            TicketError::InvalidPurchase { .. } => 2,
            TicketError::Payment(_) | TicketError::Reservation(_) => 3,
            TicketError::IoError(_)
            | TicketError::ConfigError { .. }
            | TicketError::InvalidConfigValueError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_purchase_displays_bare_message() {
        let err = TicketError::invalid_purchase("Invalid accountId");
        assert_eq!(err.to_string(), "Invalid accountId");
        assert!(err.is_invalid_purchase());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_payment_error_is_transparent() {
        let inner = PaymentError::Unavailable {
            message: "gateway down".to_string(),
        };
        let err = TicketError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.source().is_none());
        assert!(!err.is_invalid_purchase());
        assert_eq!(err.exit_code(), 3);
    }
}
