pub mod cities;
pub mod hotels;
pub mod reviews;

pub use cities::Entity as Cities;
pub use hotels::Entity as Hotels;
pub use reviews::Entity as Reviews;

// Type aliases
pub type City = cities::Model;
pub type Hotel = hotels::Model;
pub type Review = reviews::Model;

pub use reviews::Rating;
