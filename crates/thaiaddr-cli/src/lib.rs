//! thaiaddr-cli
//! ============
//!
//! Command-line interface for the `thaiaddr-core` reference table and
//! resolution engine.
//!
//! The binary (`thaiaddr-cli`) is the primary deliverable. The library target
//! carries the replay-script parser so it can be tested and reused.
//!
//! Basic usage:
//!
//! ```text
//! thaiaddr-cli stats
//! thaiaddr-cli --locale en districts 10
//! thaiaddr-cli lookup 10500
//! thaiaddr-cli suggest 50 --limit 5
//! thaiaddr-cli build data/geography.bin
//! thaiaddr-cli replay session.txt
//! ```
//!
//! For programmatic access use the `thaiaddr-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod script;
