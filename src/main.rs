//! Binary entrypoint that launches the Parley responder.
//! Run with `parley` for the HTTP server or `parley cli` for the terminal loop.

use std::process::ExitCode;

use parley_bot::start_parley_bot;

fn main() -> ExitCode {
    start_parley_bot::run()
}
