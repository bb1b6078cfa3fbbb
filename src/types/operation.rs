//! Operation types for Safe transactions

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Operation type for Safe transactions
///
/// Serialized as its integer code (`0` or `1`), which is how both the Safe
/// contract and the transaction service carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Operation {
    /// Regular call (default)
    #[default]
    Call = 0,
    /// Delegate call (executes in context of Safe)
    DelegateCall = 1,
}

impl Operation {
    /// Returns the operation as a u8 value
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Creates an Operation from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Operation::Call),
            1 => Some(Operation::DelegateCall),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Call => write!(f, "Call"),
            Operation::DelegateCall => write!(f, "DelegateCall"),
        }
    }
}

impl From<Operation> for u8 {
    fn from(op: Operation) -> Self {
        op.as_u8()
    }
}

impl TryFrom<u8> for Operation {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Operation::from_u8(value).ok_or(Error::InvalidOperation(value))
    }
}
