use std::io::{self, BufRead, Write};

use contacts::contacts::{Notifier, Surface};

/// Prints every render to the terminal.
pub(crate) struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn replace(&mut self, markup: &str) {
        if markup.is_empty() {
            println!("(no contacts)");
            return;
        }
        print!("{}", markup);
        _ = io::stdout().flush();
    }
}

pub(crate) struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("[!] {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
