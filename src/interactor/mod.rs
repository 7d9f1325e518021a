pub mod price_interactor;

pub use price_interactor::{PriceInteractor, PriceInteractorImpl};
