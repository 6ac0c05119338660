use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::{ApiClient, ApiResponse};
use crate::config::ApiConfig;
use crate::constant::{ACCEPT_IMAGE, ACCEPT_JSON};
use crate::download::ImageDownload;
use crate::error::{ImageApiError, Result};
use crate::models::{ImageInfo, ImageQuery, ImageType, ImageUpload, TaggedImage};
use crate::request::{build_url, PathParams, QueryPairs};

use super::endpoint::{
    Endpoint, DELETE_CUSTOM_SPLASHSCREEN, DELETE_ITEM_IMAGE, DELETE_ITEM_IMAGE_BY_INDEX,
    DELETE_USER_IMAGE, GET_ITEM_IMAGE, GET_ITEM_IMAGE_BY_INDEX, GET_ITEM_IMAGE_INFOS,
    GET_ITEM_IMAGE_TAGGED, GET_SPLASHSCREEN, GET_USER_IMAGE, HEAD_ITEM_IMAGE,
    HEAD_ITEM_IMAGE_BY_INDEX, HEAD_ITEM_IMAGE_TAGGED, HEAD_USER_IMAGE, POST_USER_IMAGE,
    SET_ITEM_IMAGE, SET_ITEM_IMAGE_BY_INDEX, UPDATE_ITEM_IMAGE_INDEX,
    UPLOAD_CUSTOM_SPLASHSCREEN,
};
use super::NamedEntity;

/// A fully validated request: endpoint plus resolved path and query values.
struct Call {
    endpoint: Endpoint,
    path: PathParams,
    query: QueryPairs,
}

impl Call {
    fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            path: PathParams::new(),
            query: QueryPairs::new(),
        }
    }

    fn operation(&self) -> &'static str {
        self.endpoint.operation
    }
}

/// Client for the image endpoints.
///
/// Every operation comes as a pair: `op` returns the payload, and
/// `op_with_http_info` returns it wrapped in an [`ApiResponse`] with the
/// status code and headers. Required parameters are checked before anything
/// is sent; a nil UUID or a blank name counts as missing.
#[derive(Clone)]
pub struct ImageApi {
    client: ApiClient,
    headers: HeaderMap,
}

impl ImageApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
        }
    }

    pub fn from_config(config: ApiConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ApiClient::from_env()?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns a view of this API whose calls also send `headers`. They are
    /// applied last and replace static headers of the same name.
    pub fn with_headers(&self, headers: HeaderMap) -> Self {
        let mut api = self.clone();
        api.headers.extend(headers);
        api
    }

    // ============ Item images ============

    /// Lists the images attached to an item.
    pub async fn get_item_image_infos(&self, item_id: Uuid) -> Result<Vec<ImageInfo>> {
        self.get_item_image_infos_with_http_info(item_id)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn get_item_image_infos_with_http_info(
        &self,
        item_id: Uuid,
    ) -> Result<ApiResponse<Vec<ImageInfo>>> {
        let mut call = Call::new(GET_ITEM_IMAGE_INFOS);
        let item_id = required_id(call.operation(), "itemId", item_id)?;
        call.path.push(("itemId", item_id));
        self.call_json(call).await
    }

    pub async fn get_item_image(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_item_image_with_http_info(item_id, image_type, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn get_item_image_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        let call = item_image_call(GET_ITEM_IMAGE, item_id, image_type, None, Some(query))?;
        self.call_download(call).await
    }

    pub async fn head_item_image(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_item_image_with_http_info(item_id, image_type, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn head_item_image_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        let call = item_image_call(HEAD_ITEM_IMAGE, item_id, image_type, None, Some(query))?;
        self.call_empty(call, ACCEPT_IMAGE, None).await
    }

    pub async fn get_item_image_by_index(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_item_image_by_index_with_http_info(item_id, image_type, image_index, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn get_item_image_by_index_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        let call = item_image_call(
            GET_ITEM_IMAGE_BY_INDEX,
            item_id,
            image_type,
            Some(image_index),
            Some(query),
        )?;
        self.call_download(call).await
    }

    pub async fn head_item_image_by_index(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_item_image_by_index_with_http_info(item_id, image_type, image_index, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn head_item_image_by_index_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        let call = item_image_call(
            HEAD_ITEM_IMAGE_BY_INDEX,
            item_id,
            image_type,
            Some(image_index),
            Some(query),
        )?;
        self.call_empty(call, ACCEPT_IMAGE, None).await
    }

    /// Fetches an image through the cache-friendly route that carries the
    /// tag, format and size in the path. Remaining `query` fields (width,
    /// height, quality, fill, blur, colors) still go into the query string.
    pub async fn get_item_image_tagged(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        tagged: &TaggedImage,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_item_image_tagged_with_http_info(item_id, image_type, image_index, tagged, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn get_item_image_tagged_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        tagged: &TaggedImage,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        let call = tagged_item_image_call(
            GET_ITEM_IMAGE_TAGGED,
            item_id,
            image_type,
            image_index,
            tagged,
            query,
        )?;
        self.call_download(call).await
    }

    pub async fn head_item_image_tagged(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        tagged: &TaggedImage,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_item_image_tagged_with_http_info(item_id, image_type, image_index, tagged, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn head_item_image_tagged_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        tagged: &TaggedImage,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        let call = tagged_item_image_call(
            HEAD_ITEM_IMAGE_TAGGED,
            item_id,
            image_type,
            image_index,
            tagged,
            query,
        )?;
        self.call_empty(call, ACCEPT_IMAGE, None).await
    }

    pub async fn set_item_image(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        upload: &ImageUpload,
    ) -> Result<()> {
        self.set_item_image_with_http_info(item_id, image_type, upload)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn set_item_image_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        upload: &ImageUpload,
    ) -> Result<ApiResponse<()>> {
        let call = item_image_call(SET_ITEM_IMAGE, item_id, image_type, None, None)?;
        upload.validate(call.operation())?;
        self.call_empty(call, ACCEPT_JSON, Some(upload)).await
    }

    pub async fn set_item_image_by_index(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        upload: &ImageUpload,
    ) -> Result<()> {
        self.set_item_image_by_index_with_http_info(item_id, image_type, image_index, upload)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn set_item_image_by_index_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        upload: &ImageUpload,
    ) -> Result<ApiResponse<()>> {
        let call = item_image_call(
            SET_ITEM_IMAGE_BY_INDEX,
            item_id,
            image_type,
            Some(image_index),
            None,
        )?;
        upload.validate(call.operation())?;
        self.call_empty(call, ACCEPT_JSON, Some(upload)).await
    }

    /// Deletes an item image; without `image_index` the server removes the first one.
    pub async fn delete_item_image(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: Option<u32>,
    ) -> Result<()> {
        self.delete_item_image_with_http_info(item_id, image_type, image_index)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn delete_item_image_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: Option<u32>,
    ) -> Result<ApiResponse<()>> {
        let mut call = item_image_call(DELETE_ITEM_IMAGE, item_id, image_type, None, None)?;
        call.query.push_opt("imageIndex", image_index);
        self.call_empty(call, ACCEPT_JSON, None).await
    }

    pub async fn delete_item_image_by_index(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
    ) -> Result<()> {
        self.delete_item_image_by_index_with_http_info(item_id, image_type, image_index)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn delete_item_image_by_index_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
    ) -> Result<ApiResponse<()>> {
        let call = item_image_call(
            DELETE_ITEM_IMAGE_BY_INDEX,
            item_id,
            image_type,
            Some(image_index),
            None,
        )?;
        self.call_empty(call, ACCEPT_JSON, None).await
    }

    /// Moves the image at `image_index` to `new_index` among images of the same type.
    pub async fn update_item_image_index(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        new_index: u32,
    ) -> Result<()> {
        self.update_item_image_index_with_http_info(item_id, image_type, image_index, new_index)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn update_item_image_index_with_http_info(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        image_index: u32,
        new_index: u32,
    ) -> Result<ApiResponse<()>> {
        let mut call = item_image_call(
            UPDATE_ITEM_IMAGE_INDEX,
            item_id,
            image_type,
            Some(image_index),
            None,
        )?;
        call.query.push("newIndex", new_index);
        self.call_empty(call, ACCEPT_JSON, None).await
    }

    // ============ Images by name ============

    /// Fetches the image of an artist, genre, music genre, person or studio.
    /// `image_index` selects the indexed route; artists only have that route
    /// and default to index 0.
    pub async fn get_named_image(
        &self,
        entity: NamedEntity,
        name: &str,
        image_type: ImageType,
        image_index: Option<u32>,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image_with_http_info(entity, name, image_type, image_index, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn get_named_image_with_http_info(
        &self,
        entity: NamedEntity,
        name: &str,
        image_type: ImageType,
        image_index: Option<u32>,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        let call = named_image_call(entity, false, name, image_type, image_index, query)?;
        self.call_download(call).await
    }

    pub async fn head_named_image(
        &self,
        entity: NamedEntity,
        name: &str,
        image_type: ImageType,
        image_index: Option<u32>,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image_with_http_info(entity, name, image_type, image_index, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn head_named_image_with_http_info(
        &self,
        entity: NamedEntity,
        name: &str,
        image_type: ImageType,
        image_index: Option<u32>,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        let call = named_image_call(entity, true, name, image_type, image_index, query)?;
        self.call_empty(call, ACCEPT_IMAGE, None).await
    }

    pub async fn get_artist_image(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(NamedEntity::Artist, name, image_type, Some(image_index), query)
            .await
    }

    pub async fn get_artist_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(
            NamedEntity::Artist,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn head_artist_image(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(NamedEntity::Artist, name, image_type, Some(image_index), query)
            .await
    }

    pub async fn head_artist_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(
            NamedEntity::Artist,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn get_genre_image(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(NamedEntity::Genre, name, image_type, None, query)
            .await
    }

    pub async fn get_genre_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(NamedEntity::Genre, name, image_type, None, query)
            .await
    }

    pub async fn get_genre_image_by_index(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(NamedEntity::Genre, name, image_type, Some(image_index), query)
            .await
    }

    pub async fn get_genre_image_by_index_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(
            NamedEntity::Genre,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn head_genre_image(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(NamedEntity::Genre, name, image_type, None, query)
            .await
    }

    pub async fn head_genre_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(NamedEntity::Genre, name, image_type, None, query)
            .await
    }

    pub async fn head_genre_image_by_index(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(NamedEntity::Genre, name, image_type, Some(image_index), query)
            .await
    }

    pub async fn head_genre_image_by_index_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(
            NamedEntity::Genre,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn get_music_genre_image(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(NamedEntity::MusicGenre, name, image_type, None, query)
            .await
    }

    pub async fn get_music_genre_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(NamedEntity::MusicGenre, name, image_type, None, query)
            .await
    }

    pub async fn get_music_genre_image_by_index(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(
            NamedEntity::MusicGenre,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn get_music_genre_image_by_index_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(
            NamedEntity::MusicGenre,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn head_music_genre_image(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(NamedEntity::MusicGenre, name, image_type, None, query)
            .await
    }

    pub async fn head_music_genre_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(NamedEntity::MusicGenre, name, image_type, None, query)
            .await
    }

    pub async fn head_music_genre_image_by_index(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(
            NamedEntity::MusicGenre,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn head_music_genre_image_by_index_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(
            NamedEntity::MusicGenre,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn get_person_image(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(NamedEntity::Person, name, image_type, None, query)
            .await
    }

    pub async fn get_person_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(NamedEntity::Person, name, image_type, None, query)
            .await
    }

    pub async fn get_person_image_by_index(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(NamedEntity::Person, name, image_type, Some(image_index), query)
            .await
    }

    pub async fn get_person_image_by_index_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(
            NamedEntity::Person,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn head_person_image(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(NamedEntity::Person, name, image_type, None, query)
            .await
    }

    pub async fn head_person_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(NamedEntity::Person, name, image_type, None, query)
            .await
    }

    pub async fn head_person_image_by_index(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(NamedEntity::Person, name, image_type, Some(image_index), query)
            .await
    }

    pub async fn head_person_image_by_index_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(
            NamedEntity::Person,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn get_studio_image(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(NamedEntity::Studio, name, image_type, None, query)
            .await
    }

    pub async fn get_studio_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(NamedEntity::Studio, name, image_type, None, query)
            .await
    }

    pub async fn get_studio_image_by_index(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_named_image(NamedEntity::Studio, name, image_type, Some(image_index), query)
            .await
    }

    pub async fn get_studio_image_by_index_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        self.get_named_image_with_http_info(
            NamedEntity::Studio,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    pub async fn head_studio_image(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(NamedEntity::Studio, name, image_type, None, query)
            .await
    }

    pub async fn head_studio_image_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(NamedEntity::Studio, name, image_type, None, query)
            .await
    }

    pub async fn head_studio_image_by_index(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<()> {
        self.head_named_image(NamedEntity::Studio, name, image_type, Some(image_index), query)
            .await
    }

    pub async fn head_studio_image_by_index_with_http_info(
        &self,
        name: &str,
        image_type: ImageType,
        image_index: u32,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        self.head_named_image_with_http_info(
            NamedEntity::Studio,
            name,
            image_type,
            Some(image_index),
            query,
        )
        .await
    }

    // ============ User images ============

    /// Without `user_id` the server uses the user the token belongs to.
    pub async fn get_user_image(
        &self,
        user_id: Option<Uuid>,
        query: &ImageQuery,
    ) -> Result<ImageDownload> {
        self.get_user_image_with_http_info(user_id, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn get_user_image_with_http_info(
        &self,
        user_id: Option<Uuid>,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        let call = user_image_call(GET_USER_IMAGE, user_id, Some(query))?;
        self.call_download(call).await
    }

    pub async fn head_user_image(&self, user_id: Option<Uuid>, query: &ImageQuery) -> Result<()> {
        self.head_user_image_with_http_info(user_id, query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn head_user_image_with_http_info(
        &self,
        user_id: Option<Uuid>,
        query: &ImageQuery,
    ) -> Result<ApiResponse<()>> {
        let call = user_image_call(HEAD_USER_IMAGE, user_id, Some(query))?;
        self.call_empty(call, ACCEPT_IMAGE, None).await
    }

    pub async fn post_user_image(&self, user_id: Option<Uuid>, upload: &ImageUpload) -> Result<()> {
        self.post_user_image_with_http_info(user_id, upload)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn post_user_image_with_http_info(
        &self,
        user_id: Option<Uuid>,
        upload: &ImageUpload,
    ) -> Result<ApiResponse<()>> {
        let call = user_image_call(POST_USER_IMAGE, user_id, None)?;
        upload.validate(call.operation())?;
        self.call_empty(call, ACCEPT_JSON, Some(upload)).await
    }

    pub async fn delete_user_image(&self, user_id: Option<Uuid>) -> Result<()> {
        self.delete_user_image_with_http_info(user_id)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn delete_user_image_with_http_info(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<ApiResponse<()>> {
        let call = user_image_call(DELETE_USER_IMAGE, user_id, None)?;
        self.call_empty(call, ACCEPT_JSON, None).await
    }

    // ============ Branding ============

    pub async fn get_splashscreen(&self, query: &ImageQuery) -> Result<ImageDownload> {
        self.get_splashscreen_with_http_info(query)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn get_splashscreen_with_http_info(
        &self,
        query: &ImageQuery,
    ) -> Result<ApiResponse<ImageDownload>> {
        let mut call = Call::new(GET_SPLASHSCREEN);
        query.validate(call.operation())?;
        call.query = query.to_query(&[]);
        self.call_download(call).await
    }

    pub async fn upload_custom_splashscreen(&self, upload: &ImageUpload) -> Result<()> {
        self.upload_custom_splashscreen_with_http_info(upload)
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn upload_custom_splashscreen_with_http_info(
        &self,
        upload: &ImageUpload,
    ) -> Result<ApiResponse<()>> {
        let call = Call::new(UPLOAD_CUSTOM_SPLASHSCREEN);
        upload.validate(call.operation())?;
        self.call_empty(call, ACCEPT_JSON, Some(upload)).await
    }

    pub async fn delete_custom_splashscreen(&self) -> Result<()> {
        self.delete_custom_splashscreen_with_http_info()
            .await
            .map(ApiResponse::into_data)
    }

    pub async fn delete_custom_splashscreen_with_http_info(&self) -> Result<ApiResponse<()>> {
        self.call_empty(Call::new(DELETE_CUSTOM_SPLASHSCREEN), ACCEPT_JSON, None)
            .await
    }

    // ============ Dispatch ============

    async fn send(
        &self,
        call: &Call,
        accept: &'static str,
        upload: Option<&ImageUpload>,
    ) -> Result<Response> {
        let operation = call.operation();
        let url = build_url(
            self.client.base_uri(),
            call.endpoint.template,
            &call.path,
            &call.query,
        )?;
        debug!("{}: {} {}", operation, call.endpoint.method, url);

        let mut request = self
            .client
            .request(call.endpoint.method.clone(), url)
            .header(ACCEPT, accept);
        if let Some(upload) = upload {
            request = request
                .header(CONTENT_TYPE, upload.content_type())
                .body(upload.body());
        }
        let response = request.headers(self.headers.clone()).send().await?;

        if !response.status().is_success() {
            return Err(api_error(operation, response).await);
        }
        debug!("{}: {}", operation, response.status());
        Ok(response)
    }

    async fn call_empty(
        &self,
        call: Call,
        accept: &'static str,
        upload: Option<&ImageUpload>,
    ) -> Result<ApiResponse<()>> {
        let response = self.send(&call, accept, upload).await?;
        Ok(ApiResponse::new(
            response.status(),
            response.headers().clone(),
            (),
        ))
    }

    /// A blank body decodes to `T::default()`.
    async fn call_json<T: DeserializeOwned + Default>(&self, call: Call) -> Result<ApiResponse<T>> {
        let response = self.send(&call, ACCEPT_JSON, None).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        let data = if body.trim().is_empty() {
            T::default()
        } else {
            serde_json::from_str(&body)?
        };
        Ok(ApiResponse::new(status, headers, data))
    }

    async fn call_download(&self, call: Call) -> Result<ApiResponse<ImageDownload>> {
        let response = self.send(&call, ACCEPT_IMAGE, None).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let download = ImageDownload::from_response(response, self.client.download_dir()).await?;
        Ok(ApiResponse::new(status, headers, download))
    }
}

async fn api_error(operation: &'static str, response: Response) -> ImageApiError {
    let status = response.status();
    let headers = response.headers().clone();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("{}: could not read error body: {}", operation, e);
            String::new()
        }
    };
    warn!("{} call failed with status {}", operation, status);
    ImageApiError::Api {
        operation,
        status,
        headers,
        body,
    }
}

fn required_id(operation: &'static str, parameter: &'static str, id: Uuid) -> Result<String> {
    if id.is_nil() {
        return Err(ImageApiError::missing(operation, parameter));
    }
    Ok(id.to_string())
}

fn required_name(operation: &'static str, parameter: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ImageApiError::missing(operation, parameter));
    }
    Ok(value.to_owned())
}

/// Item routes. `image_index` selects the indexed template; `query` is only
/// given for fetch and probe operations.
fn item_image_call(
    endpoint: Endpoint,
    item_id: Uuid,
    image_type: ImageType,
    image_index: Option<u32>,
    query: Option<&ImageQuery>,
) -> Result<Call> {
    let mut call = Call::new(endpoint);
    let operation = call.operation();
    call.path
        .push(("itemId", required_id(operation, "itemId", item_id)?));
    call.path.push(("imageType", image_type.to_string()));
    if let Some(image_index) = image_index {
        call.path.push(("imageIndex", image_index.to_string()));
    }
    if let Some(query) = query {
        query.validate(operation)?;
        let skip: &[&str] = if image_index.is_some() {
            &["imageIndex"]
        } else {
            &[]
        };
        call.query = query.to_query(skip);
    }
    Ok(call)
}

fn tagged_item_image_call(
    endpoint: Endpoint,
    item_id: Uuid,
    image_type: ImageType,
    image_index: u32,
    tagged: &TaggedImage,
    query: &ImageQuery,
) -> Result<Call> {
    let mut call = item_image_call(endpoint, item_id, image_type, Some(image_index), None)?;
    let operation = call.operation();
    query.validate(operation)?;
    if !(0.0..=100.0).contains(&tagged.percent_played) {
        return Err(ImageApiError::invalid(
            operation,
            "percentPlayed",
            format!("{} is outside 0-100", tagged.percent_played),
        ));
    }
    call.path
        .push(("tag", required_name(operation, "tag", &tagged.tag)?));
    call.path.push(("format", tagged.format.to_string()));
    call.path.push(("maxWidth", tagged.max_width.to_string()));
    call.path.push(("maxHeight", tagged.max_height.to_string()));
    call.path
        .push(("percentPlayed", tagged.percent_played.to_string()));
    call.path
        .push(("unplayedCount", tagged.unplayed_count.to_string()));
    call.query = query.to_query(&TaggedImage::PATH_NAMES);
    Ok(call)
}

fn named_image_call(
    entity: NamedEntity,
    head: bool,
    name: &str,
    image_type: ImageType,
    image_index: Option<u32>,
    query: &ImageQuery,
) -> Result<Call> {
    let mut call = Call::new(entity.endpoint(head, image_index.is_some()));
    let operation = call.operation();
    query.validate(operation)?;
    call.path
        .push(("name", required_name(operation, "name", name)?));
    call.path.push(("imageType", image_type.to_string()));
    if call.endpoint.template.ends_with("{imageIndex}") {
        let image_index = image_index.or(query.image_index).unwrap_or(0);
        call.path.push(("imageIndex", image_index.to_string()));
        call.query = query.to_query(&["imageIndex"]);
    } else {
        call.query = query.to_query(&[]);
    }
    Ok(call)
}

/// `/UserImage` routes; a given user id must not be nil.
fn user_image_call(
    endpoint: Endpoint,
    user_id: Option<Uuid>,
    query: Option<&ImageQuery>,
) -> Result<Call> {
    let mut call = Call::new(endpoint);
    let operation = call.operation();
    if let Some(user_id) = user_id {
        if user_id.is_nil() {
            return Err(ImageApiError::invalid(operation, "userId", "nil user id"));
        }
        call.query.push("userId", user_id);
    }
    if let Some(query) = query {
        query.validate(operation)?;
        for (name, value) in query.to_query(&[]).iter() {
            call.query.push(*name, value);
        }
    }
    Ok(call)
}
