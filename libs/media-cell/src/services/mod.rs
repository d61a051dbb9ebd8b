pub mod cloudinary;

pub use cloudinary::CloudinaryClient;
