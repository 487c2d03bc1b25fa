//! Subnet processing logic.
//!
//! - [`subnets`] - lazy subnet enumeration
//! - [`calculation`] - validated entry point combining a network view and its subnets

mod calculation;
mod subnets;

// Re-export public functions
pub use calculation::{calculate, Calculation};
pub use subnets::SubnetIter;
