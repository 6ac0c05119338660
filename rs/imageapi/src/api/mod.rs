mod endpoint;
mod image_api;
mod named_entity;

pub use image_api::ImageApi;
pub use named_entity::NamedEntity;
