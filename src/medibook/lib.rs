//! # MediBook Architecture
//!
//! MediBook is a **UI-agnostic appointment booking library**. The interactive
//! terminal menu is one possible client of the library, not the application
//! itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, runs the menu loop, renders tables     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the registry and the notifier                       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation                                 │
//! │  - Parses boundary strings, returns Rust types              │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (registry.rs + model.rs)                              │
//! │  - AppointmentRegistry: ordered records + id counter        │
//! │  - Appointment entity with booking state transitions        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<CmdResult>`), and never writes to stdout/stderr or
//! assumes a terminal. The one deliberate exception is the [`notify`] seam:
//! the `Notifier` trait is the boundary to whatever delivers confirmations,
//! and the bundled `ConsoleNotifier` simulates delivery by printing.
//!
//! The registry lives in memory for the lifetime of the process. There is no
//! persistence layer: slots are created, booked, cancelled, and searched
//! within a single session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`registry`]: The in-memory appointment collection
//! - [`model`]: Core data types (`Appointment`, `Patient`)
//! - [`notify`]: Notifier trait, email predicate, console simulator
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod registry;
