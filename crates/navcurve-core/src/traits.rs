use crate::error::Result;

/// Check the preconditions of an options value or curve record before it is used.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
