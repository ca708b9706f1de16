//! grasya - simulated database migration console.
//!
//! This library provides the pieces shared by the two front ends of the
//! `grasya` binary:
//! - `tui` - interactive console (ribbon, explorer, workspace tabs, telemetry)
//! - `headless` - runs the pipeline without a terminal and streams the event log
//!
//! All console state lives in [`store::Store`], a reducer driven by user
//! actions and cooperative timer ticks.

pub mod config;
pub mod error;
pub mod feed;
pub mod headless;
pub mod model;
pub mod schema;
pub mod settings;
pub mod simulator;
pub mod store;
pub mod timer;
pub mod tui;
pub mod workspace;
