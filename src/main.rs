use clap::Parser;
use sleep_cycle_calc::utils::logger;
use sleep_cycle_calc::{app, CliConfig};

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting sleep-cycle-calc");
    tracing::debug!("CLI config: {:?}", cli);

    match app::run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
