use std::env::{var, VarError};

use super::EnvError;

pub fn get_env_var(key: &str) -> Result<String, EnvError> {
    var(key).map_err(|e| EnvError::EnvVar(e, key.to_owned()))
}

/// Like [`get_env_var`], but an unset or empty variable is `Ok(None)`.
/// A value that is not valid unicode is still an error.
pub fn get_optional_env_var(key: &str) -> Result<Option<String>, EnvError> {
    match var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(EnvError::EnvVar(e, key.to_owned())),
    }
}
