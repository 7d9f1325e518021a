pub mod price_view;

pub use price_view::{compose_price_message, PriceView, TelegramPriceView};
