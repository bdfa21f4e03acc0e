//! Business logic services
//!
//! Services validate input and coordinate the repositories. They are
//! generic over the repository traits so a different store can be dropped
//! in without touching the routes.

pub mod food;
pub mod log;
pub mod user;

pub use food::FoodService;
pub use log::LogService;
pub use user::UserService;
