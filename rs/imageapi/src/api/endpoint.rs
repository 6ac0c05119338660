use reqwest::Method;

/// One HTTP operation of the image API: its operation id (used in errors and
/// logs), verb and path template.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub operation: &'static str,
    pub method: Method,
    pub template: &'static str,
}

impl Endpoint {
    pub const fn new(operation: &'static str, method: Method, template: &'static str) -> Self {
        Self {
            operation,
            method,
            template,
        }
    }
}

const ITEM_IMAGES: &str = "/Items/{itemId}/Images";
const ITEM_IMAGE: &str = "/Items/{itemId}/Images/{imageType}";
const ITEM_IMAGE_BY_INDEX: &str = "/Items/{itemId}/Images/{imageType}/{imageIndex}";
const ITEM_IMAGE_TAGGED: &str = "/Items/{itemId}/Images/{imageType}/{imageIndex}/{tag}/{format}/{maxWidth}/{maxHeight}/{percentPlayed}/{unplayedCount}";
const ITEM_IMAGE_INDEX: &str = "/Items/{itemId}/Images/{imageType}/{imageIndex}/Index";
const USER_IMAGE: &str = "/UserImage";
const SPLASHSCREEN: &str = "/Branding/Splashscreen";

pub(crate) const GET_ITEM_IMAGE_INFOS: Endpoint =
    Endpoint::new("getItemImageInfos", Method::GET, ITEM_IMAGES);

pub(crate) const GET_ITEM_IMAGE: Endpoint = Endpoint::new("getItemImage", Method::GET, ITEM_IMAGE);
pub(crate) const HEAD_ITEM_IMAGE: Endpoint =
    Endpoint::new("headItemImage", Method::HEAD, ITEM_IMAGE);
pub(crate) const SET_ITEM_IMAGE: Endpoint = Endpoint::new("setItemImage", Method::POST, ITEM_IMAGE);
pub(crate) const DELETE_ITEM_IMAGE: Endpoint =
    Endpoint::new("deleteItemImage", Method::DELETE, ITEM_IMAGE);

pub(crate) const GET_ITEM_IMAGE_BY_INDEX: Endpoint =
    Endpoint::new("getItemImageByIndex", Method::GET, ITEM_IMAGE_BY_INDEX);
pub(crate) const HEAD_ITEM_IMAGE_BY_INDEX: Endpoint =
    Endpoint::new("headItemImageByIndex", Method::HEAD, ITEM_IMAGE_BY_INDEX);
pub(crate) const SET_ITEM_IMAGE_BY_INDEX: Endpoint =
    Endpoint::new("setItemImageByIndex", Method::POST, ITEM_IMAGE_BY_INDEX);
pub(crate) const DELETE_ITEM_IMAGE_BY_INDEX: Endpoint =
    Endpoint::new("deleteItemImageByIndex", Method::DELETE, ITEM_IMAGE_BY_INDEX);

pub(crate) const GET_ITEM_IMAGE_TAGGED: Endpoint =
    Endpoint::new("getItemImage2", Method::GET, ITEM_IMAGE_TAGGED);
pub(crate) const HEAD_ITEM_IMAGE_TAGGED: Endpoint =
    Endpoint::new("headItemImage2", Method::HEAD, ITEM_IMAGE_TAGGED);

pub(crate) const UPDATE_ITEM_IMAGE_INDEX: Endpoint =
    Endpoint::new("updateItemImageIndex", Method::POST, ITEM_IMAGE_INDEX);

pub(crate) const GET_USER_IMAGE: Endpoint = Endpoint::new("getUserImage", Method::GET, USER_IMAGE);
pub(crate) const HEAD_USER_IMAGE: Endpoint =
    Endpoint::new("headUserImage", Method::HEAD, USER_IMAGE);
pub(crate) const POST_USER_IMAGE: Endpoint =
    Endpoint::new("postUserImage", Method::POST, USER_IMAGE);
pub(crate) const DELETE_USER_IMAGE: Endpoint =
    Endpoint::new("deleteUserImage", Method::DELETE, USER_IMAGE);

pub(crate) const GET_SPLASHSCREEN: Endpoint =
    Endpoint::new("getSplashscreen", Method::GET, SPLASHSCREEN);
pub(crate) const UPLOAD_CUSTOM_SPLASHSCREEN: Endpoint =
    Endpoint::new("uploadCustomSplashscreen", Method::POST, SPLASHSCREEN);
pub(crate) const DELETE_CUSTOM_SPLASHSCREEN: Endpoint =
    Endpoint::new("deleteCustomSplashscreen", Method::DELETE, SPLASHSCREEN);
