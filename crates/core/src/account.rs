//! # Account Module
//!
//! Bank accounts and the visitor seam used to serialize them.
//!
//! The account set is closed (Person, Company). Output formats are open:
//! each format is an [`AccountVisitor`], and adding one never touches the
//! account types.

use serde::{Deserialize, Serialize};

/// Visitor over the concrete account types.
///
/// Each method returns the serialized block for one account.
pub trait AccountVisitor {
    fn visit_person(&self, person: &Person) -> String;

    fn visit_company(&self, company: &Company) -> String;
}

/// Account of a private individual
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub number: String,
}

impl Person {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn accept<V: AccountVisitor + ?Sized>(&self, visitor: &V) -> String {
        visitor.visit_person(self)
    }
}

/// Account of a registered organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub reg_number: String,
    pub number: String,
}

impl Company {
    pub fn new(
        name: impl Into<String>,
        reg_number: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            reg_number: reg_number.into(),
            number: number.into(),
        }
    }

    pub fn accept<V: AccountVisitor + ?Sized>(&self, visitor: &V) -> String {
        visitor.visit_company(self)
    }
}

/// Any account held by the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Account {
    Person(Person),
    Company(Company),
}

impl Account {
    /// Dispatch to the visitor method matching the concrete account type.
    pub fn accept<V: AccountVisitor + ?Sized>(&self, visitor: &V) -> String {
        match self {
            Account::Person(person) => person.accept(visitor),
            Account::Company(company) => company.accept(visitor),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Account::Person(person) => &person.name,
            Account::Company(company) => &company.name,
        }
    }
}

impl From<Person> for Account {
    fn from(person: Person) -> Self {
        Account::Person(person)
    }
}

impl From<Company> for Account {
    fn from(company: Company) -> Self {
        Account::Company(company)
    }
}

/// Ordered collection of accounts.
///
/// Keeps insertion order and allows duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account at the end
    pub fn add(&mut self, account: impl Into<Account>) {
        self.accounts.push(account.into());
    }

    /// Remove the first account equal to `account`.
    ///
    /// Returns `false` when nothing matched.
    pub fn remove(&mut self, account: &Account) -> bool {
        match self.accounts.iter().position(|a| a == account) {
            Some(index) => {
                self.accounts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Run the visitor over every account in insertion order.
    pub fn accept<V: AccountVisitor + ?Sized>(&self, visitor: &V) -> Vec<String> {
        tracing::debug!(accounts = self.accounts.len(), "Visiting bank");
        self.accounts
            .iter()
            .map(|account| account.accept(visitor))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }
}

impl FromIterator<Account> for Bank {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self {
            accounts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Account> for Bank {
    fn extend<I: IntoIterator<Item = Account>>(&mut self, iter: I) {
        self.accounts.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Bank {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}

/// The two accounts opened by the demo, in insertion order.
pub fn sample_bank() -> Bank {
    let mut bank = Bank::new();
    bank.add(Person::new("Иван Алексеев", "82184931"));
    bank.add(Company::new("Microsoft", "ewuir32141324", "3424131445"));
    bank
}
