//! # Mediator Module
//!
//! Workflow coordination between three participants:
//! - Customer: places the order
//! - Programmer: builds the program
//! - Tester: verifies the program
//!
//! Participants never talk to each other directly. A message sent by one
//! participant goes through the [`Mediator`], which picks exactly one
//! recipient from the fixed cycle Customer -> Programmer -> Tester -> Customer.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow role of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Orders the program
    Customer,
    /// Writes the program
    Programmer,
    /// Tests the program
    Tester,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Programmer => "programmer",
            Role::Tester => "tester",
        }
    }

    /// Label printed in front of every message this role receives
    pub fn label(&self) -> &'static str {
        match self {
            Role::Customer => "Message to customer",
            Role::Programmer => "Message to programmer",
            Role::Tester => "Message to tester",
        }
    }

    /// Recipient of messages sent by this role
    pub fn next(&self) -> Role {
        match self {
            Role::Customer => Role::Programmer,
            Role::Programmer => Role::Tester,
            Role::Tester => Role::Customer,
        }
    }

    pub fn all() -> [Role; 3] {
        [Role::Customer, Role::Programmer, Role::Tester]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A delivered message, labelled for its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: Role,
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.recipient.label(), self.message)
    }
}

/// A workflow peer.
///
/// Identity is the participant's address, not its role: two customers are
/// two different senders. The struct is never zero-sized, so distinct
/// participants always have distinct addresses.
#[derive(Debug)]
pub struct Participant {
    role: Role,
}

impl Participant {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn customer() -> Self {
        Self::new(Role::Customer)
    }

    pub fn programmer() -> Self {
        Self::new(Role::Programmer)
    }

    pub fn tester() -> Self {
        Self::new(Role::Tester)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Send a message through the mediator, which picks the recipient.
    pub fn send(&self, message: &str, mediator: &dyn Mediator) -> Option<Notification> {
        mediator.route(message, self)
    }

    /// Receive a message addressed to this participant.
    pub fn notify(&self, message: &str) -> Notification {
        Notification {
            recipient: self.role,
            message: message.to_string(),
        }
    }

    /// Identity comparison
    pub fn is(&self, other: &Participant) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Routes a message from its sender to exactly one other participant.
pub trait Mediator {
    /// Returns the notification delivered, or `None` when the sender is not
    /// one of this mediator's participants.
    fn route(&self, message: &str, sender: &Participant) -> Option<Notification>;
}

/// Mediator for the order -> build -> test workflow.
///
/// All three slots are filled at construction, so a half-wired mediator
/// cannot exist.
#[derive(Debug)]
pub struct ManagerMediator<'a> {
    customer: &'a Participant,
    programmer: &'a Participant,
    tester: &'a Participant,
}

impl<'a> ManagerMediator<'a> {
    pub fn new(
        customer: &'a Participant,
        programmer: &'a Participant,
        tester: &'a Participant,
    ) -> CoreResult<Self> {
        if programmer.is(customer) {
            return Err(CoreError::DuplicateParticipant(Role::Programmer));
        }
        if tester.is(customer) || tester.is(programmer) {
            return Err(CoreError::DuplicateParticipant(Role::Tester));
        }

        for (slot, participant) in [
            (Role::Customer, customer),
            (Role::Programmer, programmer),
            (Role::Tester, tester),
        ] {
            if participant.role() != slot {
                return Err(CoreError::role_mismatch(slot, participant.role()));
            }
        }

        Ok(Self {
            customer,
            programmer,
            tester,
        })
    }

    /// Participant wired into the given slot
    pub fn participant(&self, role: Role) -> &'a Participant {
        match role {
            Role::Customer => self.customer,
            Role::Programmer => self.programmer,
            Role::Tester => self.tester,
        }
    }
}

impl Mediator for ManagerMediator<'_> {
    fn route(&self, message: &str, sender: &Participant) -> Option<Notification> {
        // New order goes to the programmer, finished build to the tester,
        // tested product back to the customer.
        let recipient = if sender.is(self.customer) {
            self.programmer
        } else if sender.is(self.programmer) {
            self.tester
        } else if sender.is(self.tester) {
            self.customer
        } else {
            tracing::debug!(role = %sender.role(), "Sender is not wired into this mediator");
            return None;
        };

        tracing::debug!(
            from = %sender.role(),
            to = %recipient.role(),
            "Routing message"
        );
        Some(recipient.notify(message))
    }
}

/// The fixed three-step workflow: each role reports to the next one.
pub fn workflow_script() -> [(Role, &'static str); 3] {
    [
        (Role::Customer, "Есть заказ, надо сделать программу"),
        (Role::Programmer, "Программа готова, надо протестировать"),
        (Role::Tester, "Программа протестирована и готова к продаже"),
    ]
}
