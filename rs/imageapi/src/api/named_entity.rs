use std::fmt;

use reqwest::Method;

use super::endpoint::Endpoint;

/// Library entities whose images are addressed by name rather than by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedEntity {
    Artist,
    Genre,
    MusicGenre,
    Person,
    Studio,
}

impl fmt::Display for NamedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Artist => "Artist",
            Self::Genre => "Genre",
            Self::MusicGenre => "MusicGenre",
            Self::Person => "Person",
            Self::Studio => "Studio",
        };
        write!(f, "{}", name)
    }
}

impl NamedEntity {
    /// Artists only expose the indexed route.
    pub const fn has_unindexed_route(&self) -> bool {
        !matches!(self, Self::Artist)
    }

    const fn templates(&self) -> (&'static str, &'static str) {
        match self {
            Self::Artist => (
                "/Artists/{name}/Images/{imageType}/{imageIndex}",
                "/Artists/{name}/Images/{imageType}/{imageIndex}",
            ),
            Self::Genre => (
                "/Genres/{name}/Images/{imageType}",
                "/Genres/{name}/Images/{imageType}/{imageIndex}",
            ),
            Self::MusicGenre => (
                "/MusicGenres/{name}/Images/{imageType}",
                "/MusicGenres/{name}/Images/{imageType}/{imageIndex}",
            ),
            Self::Person => (
                "/Persons/{name}/Images/{imageType}",
                "/Persons/{name}/Images/{imageType}/{imageIndex}",
            ),
            Self::Studio => (
                "/Studios/{name}/Images/{imageType}",
                "/Studios/{name}/Images/{imageType}/{imageIndex}",
            ),
        }
    }

    // [get, getByIndex, head, headByIndex]
    const fn operation_ids(&self) -> [&'static str; 4] {
        match self {
            Self::Artist => [
                "getArtistImage",
                "getArtistImage",
                "headArtistImage",
                "headArtistImage",
            ],
            Self::Genre => [
                "getGenreImage",
                "getGenreImageByIndex",
                "headGenreImage",
                "headGenreImageByIndex",
            ],
            Self::MusicGenre => [
                "getMusicGenreImage",
                "getMusicGenreImageByIndex",
                "headMusicGenreImage",
                "headMusicGenreImageByIndex",
            ],
            Self::Person => [
                "getPersonImage",
                "getPersonImageByIndex",
                "headPersonImage",
                "headPersonImageByIndex",
            ],
            Self::Studio => [
                "getStudioImage",
                "getStudioImageByIndex",
                "headStudioImage",
                "headStudioImageByIndex",
            ],
        }
    }

    pub(crate) fn endpoint(&self, head: bool, indexed: bool) -> Endpoint {
        let indexed = indexed || !self.has_unindexed_route();
        let (template, indexed_template) = self.templates();
        let [get, get_by_index, head_image, head_by_index] = self.operation_ids();
        let (operation, method) = match (head, indexed) {
            (false, false) => (get, Method::GET),
            (false, true) => (get_by_index, Method::GET),
            (true, false) => (head_image, Method::HEAD),
            (true, true) => (head_by_index, Method::HEAD),
        };
        let template = if indexed { indexed_template } else { template };
        Endpoint::new(operation, method, template)
    }
}
