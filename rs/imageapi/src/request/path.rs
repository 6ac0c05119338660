use url::Url;

use crate::error::ImageApiError;

use super::QueryPairs;

/// Values for the `{placeholder}` segments of a path template.
pub type PathParams = Vec<(&'static str, String)>;

/// Appends `template` to the path of `base`, replacing each `{name}` segment
/// with the matching value from `params`.
///
/// Values are percent-encoded as single path segments, so a `/` inside a
/// value never introduces a new segment. Any path prefix on `base` is kept.
pub fn resolve_path(
    base: &Url,
    template: &str,
    params: &[(&'static str, String)],
) -> Result<Url, ImageApiError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ImageApiError::Path(format!("{base} cannot be a base url")))?;
        segments.pop_if_empty();
        for segment in template.split('/').filter(|segment| !segment.is_empty()) {
            match segment
                .strip_prefix('{')
                .and_then(|segment| segment.strip_suffix('}'))
            {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| value)
                        .ok_or_else(|| {
                            ImageApiError::Path(format!("no value for {{{name}}} in {template}"))
                        })?;
                    segments.push(value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }
    Ok(url)
}

/// Resolves the path template and appends the query pairs.
pub fn build_url(
    base: &Url,
    template: &str,
    params: &[(&'static str, String)],
    query: &QueryPairs,
) -> Result<Url, ImageApiError> {
    let mut url = resolve_path(base, template, params)?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(name, value)| (*name, value.as_str())));
    }
    Ok(url)
}
