//! Page components for Hapil.

mod landing;
mod not_found;
mod reader;

pub use landing::Landing;
pub use not_found::NotFound;
pub use reader::Reader;
