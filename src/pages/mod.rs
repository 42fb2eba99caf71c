mod admin;
mod contact;
mod gallery;
mod home;
mod login;
mod not_found;

pub use admin::{AdminGuard, AdminPage};
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
