use anyhow::Result;
use stampgen::cli::{self, Cli, Command};
use stampgen::config::Config;
use stampgen::logger::Logger;
use stampgen::ui;

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command.clone().unwrap_or(Command::Run) {
        Command::Run => {
            let config = load_config(&cli)?;
            let logger = Logger::from_config(config.logging.enabled)?;
            ui::run_app(&config, logger).await?;
        }
        Command::Print {
            date,
            time,
            format,
            utc,
            offset,
        } => {
            let config = load_config(&cli)?;
            let zone = cli::resolve_zone(utc, offset, config.display.zone()?);
            let date = cli::parse_date_arg(&date)?;
            let time = time.map(Into::into).unwrap_or_else(|| config.ui.initial_time());

            for line in cli::format_lines(date, &time, zone, format, chrono::Utc::now().timestamp()) {
                println!("{}", line);
            }
        }
        Command::GenerateConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)?;
        }
    }

    Ok(())
}
