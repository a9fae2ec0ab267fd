//! Output formatting helpers for CLI

use crate::search::{HUMAN_WIN, MACHINE_WIN};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Describe a minimax score in words
pub fn describe_score(score: i32) -> &'static str {
    match score {
        MACHINE_WIN => "machine wins",
        HUMAN_WIN => "human wins",
        _ => "tie",
    }
}
