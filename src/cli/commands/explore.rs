use crate::config::Config;
use crate::core::catalog::DatasetCatalog;
use crate::core::loader::Loader;
use crate::errors::{AppError, AppResult};
use crate::ui::prompt::Prompter;
use crate::ui::session::Session;
use std::io;

/// Handle the interactive explorer (default command)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let catalog = DatasetCatalog::new(&cfg.data_dir);
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());

    let mut session = Session::new(prompter, Loader::new(&catalog), cfg);
    match session.run() {
        // stdin closed mid-session: leave quietly
        Err(AppError::InputClosed) => {
            println!();
            Ok(())
        }
        other => other,
    }
}
