use clap::Parser;
use tm_portal_client::utils::{logger, validation::Validate};
use tm_portal_client::{ApiClient, CliConfig, PageQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tm-portal CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let page_size = config.page_size;
    let client = ApiClient::new(config);

    match client.list_tms(PageQuery::new(1, page_size)).await {
        Ok(page) => {
            tracing::info!(
                "✅ Fetched page {} of TMs ({} of {} total)",
                page.page_number,
                page.items.len(),
                page.total_count
            );
            println!(
                "{:>6}  {:<12}  {:<28}  {:<14}  {}",
                "id", "code", "name", "status", "risk"
            );
            for tm in &page.items {
                println!(
                    "{:>6}  {:<12}  {:<28}  {:<14}  {}",
                    tm.id,
                    tm.code,
                    tm.name,
                    format!("{:?}", tm.status),
                    tm.overall_risk_level
                        .map(|level| format!("{:?}", level))
                        .unwrap_or_else(|| "-".to_string())
                );
            }
            if page.has_next_page {
                println!("... more pages available (total {})", page.total_count);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Listing TMs failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                tm_portal_client::utils::error::ErrorSeverity::Low => 0,
                tm_portal_client::utils::error::ErrorSeverity::Medium => 2,
                tm_portal_client::utils::error::ErrorSeverity::High => 1,
                tm_portal_client::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
