mod error;
mod requests;
mod types;

pub use error::RequestError;
pub use requests::{parse_beer_id, BoxPriceQuery};
pub use types::Beer;
