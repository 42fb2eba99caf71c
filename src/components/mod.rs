pub mod navbar;
pub mod ui;

pub use navbar::Navbar;
