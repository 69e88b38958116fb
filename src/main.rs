use color_eyre::eyre::Result;
use coursedesk_cli::config::CliConfig;
use dotenv::dotenv;
use std::process;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            process::exit(2);
        }
    };

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Evaluate the snapshot
    match coursedesk_cli::run(&config) {
        Ok(report) => {
            print!("{}", report);
            process::exit(report.exit_code());
        }
        Err(e) => {
            error!("Evaluation failed: {}", e);
            eprintln!("Error: {:?}", e);
            process::exit(2);
        }
    }
}
