// src/paprika/mod.rs
pub mod models;
pub mod price_service;

pub use models::{Quote, Ticker};
pub use price_service::{PaprikaPriceService, PriceService};
