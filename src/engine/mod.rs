mod adjust;
mod aggregate;
mod closing;
mod filter;
mod merge;
mod reconciler;
mod summary;

pub use adjust::apply_suspense_adjustment;
pub use aggregate::aggregate;
pub use closing::compute_closing;
pub use filter::filter_active;
pub use merge::merge;
pub use reconciler::{MissingSuspensePolicy, Reconciler, Reconciliation, DEFAULT_SUSPENSE_CODE};
pub use summary::summarize;
