mod download;
mod test;

pub use download::{filename_from_disposition, ImageDownload};
