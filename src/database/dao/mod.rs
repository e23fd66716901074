pub mod cities;
pub mod hotels;
pub mod reviews;

pub use cities::CitiesDao;
pub use hotels::{HotelsDao, RatingCount};
pub use reviews::{Page, PageRequest, ReviewDetails, ReviewsDao};
