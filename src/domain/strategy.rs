//! Interchangeable arithmetic strategies behind a common trait.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

pub trait Strategy: fmt::Debug {
    fn execute(&self, a: i64, b: i64) -> DomainResult<i64>;
}

#[derive(Debug, Default)]
pub struct AddStrategy;

impl Strategy for AddStrategy {
    fn execute(&self, a: i64, b: i64) -> DomainResult<i64> {
        a.checked_add(b).ok_or(DomainError::Overflow {
            operation: "addition",
            a,
            b,
        })
    }
}

#[derive(Debug, Default)]
pub struct SubtractStrategy;

impl Strategy for SubtractStrategy {
    fn execute(&self, a: i64, b: i64) -> DomainResult<i64> {
        a.checked_sub(b).ok_or(DomainError::Overflow {
            operation: "subtraction",
            a,
            b,
        })
    }
}

#[derive(Debug, Default)]
pub struct MultiplyStrategy;

impl Strategy for MultiplyStrategy {
    fn execute(&self, a: i64, b: i64) -> DomainResult<i64> {
        a.checked_mul(b).ok_or(DomainError::Overflow {
            operation: "multiplication",
            a,
            b,
        })
    }
}

/// Named action selecting a concrete strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    pub fn strategy(&self) -> Box<dyn Strategy> {
        match self {
            Operation::Addition => Box::new(AddStrategy),
            Operation::Subtraction => Box::new(SubtractStrategy),
            Operation::Multiplication => Box::new(MultiplyStrategy),
        }
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "addition" => Ok(Operation::Addition),
            "subtraction" => Ok(Operation::Subtraction),
            "multiplication" => Ok(Operation::Multiplication),
            _ => Err(DomainError::InvalidAction(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "addition"),
            Operation::Subtraction => write!(f, "subtraction"),
            Operation::Multiplication => write!(f, "multiplication"),
        }
    }
}

/// Holds the current strategy and delegates to it.
#[derive(Debug, Default)]
pub struct Context {
    strategy: Option<Box<dyn Strategy>>,
}

impl Context {
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn with_strategy(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    pub fn strategy(&self) -> Option<&dyn Strategy> {
        self.strategy.as_deref()
    }

    /// Replaces the strategy at runtime.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        debug!(?strategy, "strategy replaced");
        self.strategy = Some(strategy);
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute_strategy(&self, a: i64, b: i64) -> DomainResult<i64> {
        let strategy = self.strategy.as_ref().ok_or(DomainError::NoStrategy)?;
        strategy.execute(a, b)
    }
}

/// Closure-based context: any `Fn(i64, i64) -> i64` is a strategy.
pub struct FnContext {
    strategy: Box<dyn Fn(i64, i64) -> i64>,
}

impl FnContext {
    pub fn new(strategy: impl Fn(i64, i64) -> i64 + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Replaces the strategy; the new closure may capture different state.
    pub fn set_strategy(&mut self, strategy: impl Fn(i64, i64) -> i64 + 'static) {
        self.strategy = Box::new(strategy);
    }

    pub fn execute(&self, a: i64, b: i64) -> i64 {
        (self.strategy)(a, b)
    }
}

impl fmt::Debug for FnContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnContext").finish_non_exhaustive()
    }
}
