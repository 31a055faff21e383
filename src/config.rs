use crate::models::StyleRequest;
use crate::profile::StyleProfile;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Load a style request from a JSON file. Missing fields take their defaults.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<StyleRequest> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let req = serde_json::from_str(&text)
        .with_context(|| format!("parsing style request {}", path.display()))?;
    Ok(req)
}

/// Save a style request as pretty JSON.
pub fn save_request<P: AsRef<Path>>(req: &StyleRequest, path: P) -> Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(req)?;
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    f.write_all(s.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Save a derived profile as pretty JSON.
pub fn save_profile<P: AsRef<Path>>(profile: &StyleProfile, path: P) -> Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(profile)?;
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    f.write_all(s.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FontFamily;
    use tempfile::tempdir;

    #[test]
    fn request_roundtrip() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("req.json");
        let req = StyleRequest {
            font_family: FontFamily::Serif,
            columns_per_page: 2,
            ..StyleRequest::default()
        };
        save_request(&req, &p).unwrap();
        assert_eq!(load_request(&p).unwrap(), req);
    }

    #[test]
    fn write_errors_name_the_file() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("no_such_dir").join("req.json");
        let err = save_request(&StyleRequest::default(), &p).unwrap_err();
        assert!(format!("{err}").contains("req.json"));
        let err = save_profile(&StyleProfile::baseline(), &p).unwrap_err();
        assert!(format!("{err}").contains("req.json"));
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = load_request(dir.path().join("nope.json")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }
}
