use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command: write `cfg` (defaults plus any `--data-dir`)
/// to the configuration file.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let path = Config::config_file();
    cfg.save_to(&path)?;

    success(format!("Config file: {}", path.display()));
    success(format!("Data directory: {}", cfg.data_dir));

    if !Path::new(&cfg.data_dir).is_dir() {
        warning(format!(
            "Data directory {} does not exist yet; put chicago.csv, new_york_city.csv and washington.csv there",
            cfg.data_dir
        ));
    }
    Ok(())
}
