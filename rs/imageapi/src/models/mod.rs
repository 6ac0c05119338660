mod image_format;
mod image_info;
mod image_query;
mod image_type;
mod image_upload;
mod test;

pub use image_format::ImageFormat;
pub use image_info::ImageInfo;
pub use image_query::{ImageQuery, TaggedImage};
pub use image_type::ImageType;
pub use image_upload::{ImageUpload, UploadEncoding};
