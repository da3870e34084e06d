use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use ticket_service::{
    LoggingPaymentService, LoggingSeatReservationService, PurchaseRequestFile, PurchaseSummary,
    TicketService,
};

fn write_request(content: &str) -> Result<NamedTempFile> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(content.as_bytes())?;
    Ok(temp_file)
}

#[test]
fn test_quote_from_request_file() -> Result<()> {
    let temp_file = write_request(
        r#"
account_id = 12

[[tickets]]
type = "ADULT"
count = 2

[[tickets]]
type = "CHILD"
count = 3

[[tickets]]
type = "INFANT"
count = 1
"#,
    )?;

    let request = PurchaseRequestFile::from_file(temp_file.path())?;
    let service = TicketService::new(LoggingPaymentService, LoggingSeatReservationService);
    let summary = service.quote(request.account_id(), &request.tickets)?;

    assert_eq!(
        summary,
        PurchaseSummary {
            account_id: 12,
            total_tickets: 6,
            total_price: 70,
        }
    );

    service.purchase_tickets(request.account_id(), &request.tickets)?;
    Ok(())
}

#[test]
fn test_request_file_without_account_is_rejected_by_service() -> Result<()> {
    let temp_file = write_request(
        r#"
[[tickets]]
type = "ADULT"
count = 1
"#,
    )?;

    let request = PurchaseRequestFile::from_file(temp_file.path())?;
    let service = TicketService::new(LoggingPaymentService, LoggingSeatReservationService);
    let err = service
        .purchase_tickets(request.account_id(), &request.tickets)
        .unwrap_err();

    assert!(err.is_invalid_purchase());
    assert_eq!(err.to_string(), "Invalid accountId");
    Ok(())
}

#[test]
fn test_request_file_without_tickets_is_rejected_by_service() -> Result<()> {
    let temp_file = write_request("account_id = 5\n")?;

    let request = PurchaseRequestFile::from_file(temp_file.path())?;
    let service = TicketService::new(LoggingPaymentService, LoggingSeatReservationService);
    let err = service.quote(request.account_id(), &request.tickets).unwrap_err();

    assert_eq!(err.to_string(), "Invalid ticket requests");
    Ok(())
}
