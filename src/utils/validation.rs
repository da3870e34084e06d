use crate::domain::model::{TicketType, TicketTypeRequest};
use crate::utils::error::{Result, TicketError};
use std::collections::HashSet;

/// Most entries a single purchase request may carry.
pub const MAX_REQUEST_ENTRIES: usize = 20;

/// Most tickets (summed over all entries) a single purchase may buy.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_account_id(account_id: i64) -> Result<()> {
    tracing::debug!("Validating accountId: {}", account_id);
    if account_id <= 0 {
        tracing::warn!("Invalid accountId: {}", account_id);
        return Err(TicketError::invalid_purchase("Invalid accountId"));
    }
    Ok(())
}

/// Checks the shape of the request list, then the infant/child composition rule.
///
/// The composition rule looks at entries, not quantities: a `CHILD` entry with a
/// count of zero still needs an `ADULT` entry alongside it.
pub fn validate_ticket_requests(requests: &[TicketTypeRequest]) -> Result<()> {
    tracing::debug!("Validating {} ticket type requests", requests.len());
    if requests.is_empty() || requests.len() > MAX_REQUEST_ENTRIES {
        tracing::warn!("Invalid ticket requests: {:?}", requests);
        return Err(TicketError::invalid_purchase("Invalid ticket requests"));
    }

    let has_entry = |wanted: TicketType| requests.iter().any(|r| r.ticket_type() == wanted);

    if (has_entry(TicketType::Infant) || has_entry(TicketType::Child)) && !has_entry(TicketType::Adult) {
        let message = "Infant or Child ticket can not be purchased without Adult ticket";
        tracing::warn!("{}", message);
        return Err(TicketError::invalid_purchase(message));
    }

    Ok(())
}

/// Enforces the per-purchase ticket ceiling and narrows the total for the reservation call.
pub fn validate_total_tickets(total_tickets: u64) -> Result<u32> {
    match u32::try_from(total_tickets) {
        Ok(total) if total_tickets <= MAX_TICKETS_PER_PURCHASE => Ok(total),
        _ => {
            let message = format!(
                "Can't purchase more than {} tickets at a time",
                MAX_TICKETS_PER_PURCHASE
            );
            tracing::warn!("{} (requested {})", message, total_tickets);
            Err(TicketError::invalid_purchase(message))
        }
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TicketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TicketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(TicketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(TicketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TicketError::ConfigError {
        message: format!("Missing required field: {}", field_name),
    })
}
