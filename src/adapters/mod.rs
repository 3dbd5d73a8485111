//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `intake` - Quote intake implementations (log, HTTP, in-memory)

pub mod intake;

pub use intake::{
    build_intake, HttpIntakeConfig, HttpQuoteIntake, InMemoryQuoteIntake, LoggingQuoteIntake,
    PayloadSigner,
};
