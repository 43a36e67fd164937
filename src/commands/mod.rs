pub mod config;
pub mod context;
pub mod delete;
pub mod detect;
pub mod enable;
pub mod list;
pub mod reorder;
pub mod show;
pub mod status;

use colored::Colorize;

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
