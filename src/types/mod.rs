mod amount;
mod errors;

pub use amount::Amount;
pub use errors::AmountError;

/// Ledger account code. Always kept as text: codes may carry leading zeros.
pub type AccountCode = String;
