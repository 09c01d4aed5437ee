//! Campus Assistant - Context-Tracking University Information Assistant
//!
//! This crate answers prospective-student questions about colleges, degree
//! programs, admission requirements, facilities, and campus locations. Each
//! sender gets a session that remembers the active college, program, and
//! topic across turns, and every turn is mirrored to a plain-text transcript.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
