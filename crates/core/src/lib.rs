#![forbid(unsafe_code)]

pub mod model;
pub mod thumbnail;

pub use thumbnail::ThumbnailUrl;
