//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Intake Ports
//!
//! - `QuoteIntake` - Port for delivering assembled quote requests

mod quote_intake;

pub use quote_intake::{IntakeError, IntakeReceipt, QuoteIntake, DEFAULT_NOTICE};
