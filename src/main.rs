use clap::Parser;
use tax_form_client::utils::{logger, validation::Validate};
use tax_form_client::{CliConfig, HttpTaxApi, SharedResults, SubmissionHandler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tax-form-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證端點設定
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let request = config.to_request();
    let api = HttpTaxApi::from_config(&config);
    let results = SharedResults::new();
    let handler = SubmissionHandler::new(api, results);

    match handler.submit(&request).await {
        Ok(text) => {
            tracing::info!("✅ Submission completed");
            println!("{}", text);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
