//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact book library**. The interactive console
//! session in `main.rs` is one client of it; the same core would serve a
//! different front end unchanged.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (main.rs)                                    │
//! │  - Prompt loop, reads lines, prints colored replies         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch Layer (dispatch.rs)                               │
//! │  - Tokenizes input, routes commands to handlers             │
//! │  - The single funnel turning handler errors into messages   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one module per command              │
//! │  - Operates on the book, returns structured CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer (model.rs, book.rs, store/)                     │
//! │  - Validated Phone/Birthday types, Contact, AddressBook     │
//! │  - Abstract BookStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `dispatch.rs` inward (dispatch, commands, book, storage), code:
//! - Takes regular Rust function arguments, including "today"
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** reads the wall clock
//!
//! Passing the current date in from the session layer is what makes the
//! birthday logic testable against fixed dates.
//!
//! ## Testing Strategy
//!
//! 1. **Model and book** (`model.rs`, `book.rs`): Thorough unit tests of
//!    validation and the birthday window. This is where the lion's share of
//!    testing lives.
//!
//! 2. **Commands** (`commands/*.rs`): Unit tests of each handler's replies,
//!    including the exact wording users see.
//!
//! 3. **Session** (`tests/`): End-to-end tests that script stdin against the
//!    built binary and assert on the full transcript.
//!
//! ## Module Overview
//!
//! - [`dispatch`]: Input tokenizing and command routing
//! - [`commands`]: Business logic for each command
//! - [`book`]: The ordered contact collection and birthday window
//! - [`model`]: Core data types (`Contact`, `Phone`, `Birthday`)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod book;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod store;
