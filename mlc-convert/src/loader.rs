//! Loading of the two v1 input documents.

use std::path::Path;
use std::sync::mpsc;
use std::thread;

use mlc_config_core::{parse_file, ParseError};
use serde::Deserialize;
use thiserror::Error;

use crate::v1::{AuthConfig, Config};

/// Errors returned while loading v1 input documents.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("{path} is not a valid authentication configuration")]
    InvalidAuth { path: String },
    #[error("loader thread for {path} panicked")]
    Panicked { path: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAuthConfig {
    #[serde(default)]
    is_auth_necessary: Option<bool>,
    #[serde(default)]
    user_info_url: Option<String>,
    #[serde(default)]
    user_logout_url: Option<String>,
}

/// Load an authentication document; `isAuthNecessary` must be present.
pub fn load_auth_config(path: &Path) -> Result<AuthConfig, LoadError> {
    let raw: RawAuthConfig = parse_file(path)?;
    let Some(is_auth_necessary) = raw.is_auth_necessary else {
        return Err(LoadError::InvalidAuth {
            path: path.display().to_string(),
        });
    };

    Ok(AuthConfig {
        is_auth_necessary,
        user_info_url: raw.user_info_url,
        user_logout_url: raw.user_logout_url,
    })
}

/// Load a v1 configuration document.
pub fn load_config(path: &Path) -> Result<Config, LoadError> {
    Ok(parse_file(path)?)
}

/// Load both documents concurrently.
///
/// Each load reports back over a channel as soon as it finishes; the first
/// error to arrive is returned. A loader thread that panics is reported as
/// [`LoadError::Panicked`] for its path.
pub fn load_inputs(auth_path: &Path, config_path: &Path) -> Result<(AuthConfig, Config), LoadError> {
    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel();
        let auth_tx = tx.clone();
        let auth_handle = scope.spawn(move || {
            let _ = auth_tx.send(Loaded::Auth(load_auth_config(auth_path)));
        });
        let config_handle = scope.spawn(move || {
            let _ = tx.send(Loaded::Config(load_config(config_path)));
        });

        let mut auth = None;
        let mut config = None;
        let mut first_error = None;
        // Ends once both senders are dropped, i.e. both threads are done.
        for loaded in rx {
            match loaded {
                Loaded::Auth(Ok(value)) => auth = Some(value),
                Loaded::Config(Ok(value)) => config = Some(value),
                Loaded::Auth(Err(err)) | Loaded::Config(Err(err)) => {
                    first_error.get_or_insert(err);
                }
            }
        }

        // A panicked thread sent nothing; joining here keeps the scope from
        // re-raising the panic.
        let _ = auth_handle.join();
        let _ = config_handle.join();
        if let Some(err) = first_error {
            return Err(err);
        }

        match (auth, config) {
            (Some(auth), Some(config)) => Ok((auth, config)),
            (None, _) => Err(LoadError::Panicked {
                path: auth_path.display().to_string(),
            }),
            (Some(_), None) => Err(LoadError::Panicked {
                path: config_path.display().to_string(),
            }),
        }
    })
}

enum Loaded {
    Auth(Result<AuthConfig, LoadError>),
    Config(Result<Config, LoadError>),
}
