mod image_listing_port;

pub use image_listing_port::ImageListingPort;

#[cfg(test)]
pub use image_listing_port::MockImageListingPort;
