//! # Patterns Core
//!
//! Domain types for the two pattern demos.
//!
//! ## Modules
//!
//! - [`mediator`] - Customer / Programmer / Tester workflow routed through a
//!   [`ManagerMediator`]
//! - [`account`] - [`Person`] and [`Company`] accounts held by a [`Bank`] and
//!   serialized through an [`AccountVisitor`]
//! - [`error`] - [`CoreError`] for coordinator wiring
//!
//! ## Example
//!
//! ```rust
//! use patterns_core::{ManagerMediator, Participant};
//!
//! let customer = Participant::customer();
//! let programmer = Participant::programmer();
//! let tester = Participant::tester();
//! let mediator = ManagerMediator::new(&customer, &programmer, &tester).unwrap();
//!
//! let delivered = customer.send("New order", &mediator).unwrap();
//! assert_eq!(delivered.to_string(), "Message to programmer: New order");
//! ```

pub mod account;
pub mod error;
pub mod mediator;

// Re-export main types
pub use account::{sample_bank, Account, AccountVisitor, Bank, Company, Person};
pub use error::{CoreError, CoreResult};
pub use mediator::{workflow_script, ManagerMediator, Mediator, Notification, Participant, Role};
