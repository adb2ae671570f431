//! Rule-based text responder with durable conversation logging.

// Strict lint discipline for the whole crate
#![deny(warnings)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(dead_code)]
#![deny(non_camel_case_types)]
#![deny(unused_imports)]
#![deny(unused_variables)]
#![deny(unused_must_use)]
#![deny(non_snake_case)]
#![deny(non_upper_case_globals)]
#![deny(nonstandard_style)]
#![forbid(unsafe_op_in_unsafe_fn)]
// Clippy discipline
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::unwrap_in_result)]
#![deny(clippy::redundant_clone)]
#![deny(overflowing_literals)]

/// Interactive command-line chat loop.
#[allow(clippy::print_stdout)]
pub mod cli;
/// Runtime configuration loaded from the environment.
pub mod config;
/// Intent-matching engine (ordered rules, fallback policy, exit detection).
pub mod engine;
/// Conversation log (append-only exchange store).
pub mod history;
/// HTTP server and API routes.
#[allow(clippy::missing_errors_doc, clippy::unused_async)]
pub mod server;
/// Entry helpers to start the responder.
pub mod start_parley_bot;
