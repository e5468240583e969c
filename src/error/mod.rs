mod landing;

pub use landing::LandingError;
