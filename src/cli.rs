//! Interactive command-line chat loop.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::server::AppState;

/// Run the interactive loop until an exit command or end of input.
///
/// Every exchange is logged best-effort: a failed write is reported and the
/// loop keeps going, since the reply itself is the user-facing contract.
///
/// # Errors
/// Returns an error if reading from stdin or writing to stdout fails.
pub async fn run_cli(state: Arc<AppState>) -> io::Result<()> {
    println!("{}", "=".repeat(50));
    println!("Welcome to Parley!");
    println!("Type 'quit', 'exit', or 'bye' to end the conversation.");
    println!("{}", "=".repeat(50));

    let stdin = io::stdin();
    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let result = state.matcher.respond(input);
        println!("Parley: {}", result.response);

        if let Err(err) = state.store.record(input, &result.response).await {
            tracing::warn!("could not save exchange: {err}");
        }

        if result.is_exit {
            break;
        }
    }

    Ok(())
}
