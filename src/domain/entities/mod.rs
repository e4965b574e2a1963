//! Domain entity definitions.

mod image_record;
mod page;

pub use image_record::{
    DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_IMAGE_HOST, DisplayUrlTemplate,
    ImageId, ImageRecord,
};
pub use page::{CacheKey, DEFAULT_PAGE_SIZE, PageNumber};
