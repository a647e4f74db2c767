//! # On-Call Rust
//!
//! Rotation schedule computation engine.
//!
//! This crate computes on-call coverage timelines from a rotation definition
//! (ordered participants, a handover epoch, and a fixed handover interval)
//! and an ordered list of coverage overrides. The computation is a pipeline
//! of three pure stages, each taking and returning an ordered sequence of
//! shifts over half-open UTC intervals.
//!
//! ## Features
//!
//! - **Data Loading**: Parse rotation definitions and override lists from JSON
//! - **Base Generation**: Round-robin handover shifts clipped to a query window
//! - **Override Application**: Last-writer-wins layering of coverage overrides
//! - **Coalescing**: Minimal timelines with touching same-owner shifts merged
//! - **Time Handling**: Strict UTC second-precision timestamp codec
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Value types consumed and produced by the pipeline
//! - [`error`]: Error taxonomy for eager input validation
//! - [`models`]: Timestamp codec and JSON input parsing
//! - [`services`]: The pure scheduling stages and their composition
//!
//! ## Concurrency
//!
//! Every stage is a pure, synchronous function over immutable value inputs:
//! no shared state, no I/O, no suspension points. The pipeline is safe to
//! call from any number of threads concurrently.

pub mod api;
pub mod error;
pub mod models;
pub mod services;

pub use api::{Override, Owner, Period, ScheduleDefinition, Shift};
pub use error::{ScheduleError, ScheduleResult};
pub use services::{apply_overrides, compute_schedule, generate_base_schedule, merge_adjacent};
