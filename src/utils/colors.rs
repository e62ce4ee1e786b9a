/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Wraps `value` in GREY when it is the placeholder for a missing cell.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_grey() {
        assert_eq!(colorize_optional("--"), format!("{GREY}--{RESET}"));
        assert_eq!(colorize_optional("--   "), format!("{GREY}--   {RESET}"));
        assert_eq!(colorize_optional("Male"), "Male");
    }
}
