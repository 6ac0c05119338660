mod path;
mod query;

pub use path::{build_url, resolve_path, PathParams};
pub use query::QueryPairs;
