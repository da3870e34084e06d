use clap::Parser;
use ticket_service::utils::{logger, validation::Validate};
use ticket_service::{
    CliConfig, LoggingPaymentService, LoggingSeatReservationService, PurchaseSummary, TicketError,
    TicketService,
};

fn print_summary(summary: &PurchaseSummary, as_json: bool) -> Result<(), TicketError> {
    if as_json {
        let json = serde_json::to_string_pretty(summary).map_err(|e| TicketError::ConfigError {
            message: format!("Failed to serialize summary: {}", e),
        })?;
        println!("{}", json);
    } else {
        println!("🎟️ Account:       {}", summary.account_id);
        println!("🎟️ Total tickets: {}", summary.total_tickets);
        println!("💷 Total price:   {} GBP", summary.total_price);
    }
    Ok(())
}

fn run(config: &CliConfig) -> Result<(), TicketError> {
    let (account_id, tickets) = config.purchase_request()?;
    tracing::debug!("Ticket requests: {:?}", tickets);

    let service = TicketService::new(LoggingPaymentService, LoggingSeatReservationService);

    let summary = service.quote(account_id, &tickets)?;
    if config.dry_run {
        tracing::info!("🔍 Dry run: no payment or reservation made");
        return print_summary(&summary, config.json);
    }

    service.purchase_tickets(account_id, &tickets)?;
    if !config.json {
        println!("✅ Tickets purchased successfully!");
    }
    print_summary(&summary, config.json)
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting ticket-service CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Ticket purchase failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
