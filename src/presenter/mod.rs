pub mod price_presenter;

pub use price_presenter::{PricePresenter, PricePresenterImpl};
