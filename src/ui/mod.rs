// Mon Oct 19 2026 - Alex

pub mod cli;

pub use cli::{Args, Command, CommandHandler};

use colored::Colorize;

// Status lines go to stderr; stdout may carry generated source.

pub fn print_info(message: &str) {
    eprintln!("{} {}", "[INFO]".cyan(), message);
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "[OK]".green(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "[WARN]".yellow(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red(), message);
}
