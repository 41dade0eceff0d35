pub mod beers;
pub mod box_price;
pub mod error;
pub mod health;
pub mod response;

pub use error::ApiError;
