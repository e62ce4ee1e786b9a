use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            let source = if path.exists() {
                path.display().to_string()
            } else {
                "defaults".to_string()
            };
            info(format!("Current configuration ({}):\n", source));
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        } else {
            println!("{}", path.display());
        }
    }

    Ok(())
}
