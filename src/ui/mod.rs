pub mod messages;
pub mod prompt;
pub mod report;
pub mod session;

pub use prompt::Prompter;
pub use session::Session;
