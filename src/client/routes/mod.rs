pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;

pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
