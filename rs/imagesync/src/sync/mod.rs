mod sync;

pub use self::sync::{sync_item_images, FailedImage, SyncReport};
