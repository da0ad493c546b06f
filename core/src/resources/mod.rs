//! One handle per resource area of the remote API.
//!
//! Every method builds a fixed URL from its arguments, delegates to the
//! client's dispatcher and, on failure, wraps the classified error with a
//! description of the operation. Arguments are interpolated as given.

mod accounts;
mod actions;
mod blacklist;
mod campaigns;
mod people;
mod statistics;
mod templates;

pub use accounts::Accounts;
pub use actions::Actions;
pub use blacklist::Blacklist;
pub use campaigns::Campaigns;
pub use people::People;
pub use statistics::Statistics;
pub use templates::Templates;
