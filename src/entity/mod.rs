mod bot_error;
mod snapshot;

pub use bot_error::BotError;
pub use snapshot::{PriceUpdate, Snapshot};
