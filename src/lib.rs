//! kmpull library — exposes all internal modules so integration tests in tests/ can import them.
//! This is a CLI tool; the lib target exists solely to give the test suite access to internal
//! types. `must_use_candidate` and `missing_errors_doc` are suppressed because these are
//! implementation details, not a published library API.
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,   // internal helpers; callers are tests, not library consumers
    clippy::missing_errors_doc,   // failure kinds are documented on the Error enum itself
)]

pub mod cli;
pub mod config;
pub mod configmap;
pub mod display;
pub mod errors;
pub mod k8s;
