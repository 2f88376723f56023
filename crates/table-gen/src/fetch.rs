use std::fs;
use std::path::Path;

use tracing::info;

use crate::{GenConfig, GenError};

/// Make sure `config.names_path` exists, downloading it from `config.url`
/// if it does not and fetching is allowed.
///
/// The body is written next to the target first and renamed into place, so
/// an interrupted download never leaves a truncated list behind.
pub fn ensure_names_file(config: &GenConfig) -> Result<(), GenError> {
    let path = config.names_path.as_path();
    if path.exists() {
        return Ok(());
    }
    if !config.fetch {
        return Err(GenError::MissingNames(path.to_path_buf()));
    }

    info!(url = %config.url, path = %path.display(), "downloading names list");
    let body = download(&config.url)?;
    save(path, &body)?;
    info!(bytes = body.len(), "saved names list");
    Ok(())
}

fn download(url: &str) -> Result<Vec<u8>, GenError> {
    let fetch_err = |source| GenError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(fetch_err)?;
    let body = response.bytes().map_err(fetch_err)?;
    Ok(body.to_vec())
}

fn save(path: &Path, body: &[u8]) -> Result<(), GenError> {
    let partial = path.with_extension("part");
    let write_err = |source| GenError::Write {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&partial, body).map_err(write_err)?;
    fs::rename(&partial, path).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NamesList.txt");
        fs::write(&path, "0041\tLATIN CAPITAL LETTER A\n").unwrap();
        let config = GenConfig {
            names_path: path.clone(),
            url: "http://127.0.0.1:9/unreachable".to_string(),
            fetch: true,
            ..GenConfig::default()
        };
        ensure_names_file(&config).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "0041\tLATIN CAPITAL LETTER A\n"
        );
    }

    #[test]
    fn missing_file_without_fetch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenConfig {
            names_path: dir.path().join("absent.txt"),
            fetch: false,
            ..GenConfig::default()
        };
        let err = ensure_names_file(&config).unwrap_err();
        assert!(matches!(err, GenError::MissingNames(p) if p.ends_with("absent.txt")));
    }
}
