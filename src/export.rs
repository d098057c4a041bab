//! Writing rendered assets to disk.
//!
//! Each asset lands in the output directory under its suggested name,
//! `ad-<format id>.png`. Existing files with the same name are overwritten,
//! matching what a browser download of the same asset would produce.

use crate::types::ResizedAsset;
use std::io;
use std::path::{Path, PathBuf};

/// Write every asset into `output_dir`, creating it if needed.
///
/// Returns the written paths in asset order.
pub fn save_assets(assets: &[ResizedAsset], output_dir: &Path) -> io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    assets
        .iter()
        .map(|asset| {
            let path = output_dir.join(asset.filename());
            std::fs::write(&path, &asset.encoded)?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AdFormat;
    use tempfile::TempDir;

    fn asset(id: &str, bytes: &[u8]) -> ResizedAsset {
        ResizedAsset {
            format: AdFormat::new(id, id, 10, 10),
            encoded: bytes.to_vec(),
        }
    }

    #[test]
    fn writes_each_asset_under_its_filename() {
        let tmp = TempDir::new().unwrap();
        let assets = vec![asset("fb-ig-square", b"one"), asset("ig-story", b"two")];

        let paths = save_assets(&assets, tmp.path()).unwrap();

        assert_eq!(
            paths,
            vec![
                tmp.path().join("ad-fb-ig-square.png"),
                tmp.path().join("ad-ig-story.png"),
            ]
        );
        assert_eq!(std::fs::read(&paths[0]).unwrap(), b"one");
        assert_eq!(std::fs::read(&paths[1]).unwrap(), b"two");
    }

    #[test]
    fn creates_missing_output_dir() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested/ads");

        save_assets(&[asset("ig-story", b"x")], &out).unwrap();
        assert!(out.join("ad-ig-story.png").exists());
    }

    #[test]
    fn overwrites_previous_export() {
        let tmp = TempDir::new().unwrap();
        save_assets(&[asset("ig-story", b"old")], tmp.path()).unwrap();
        save_assets(&[asset("ig-story", b"new")], tmp.path()).unwrap();

        assert_eq!(
            std::fs::read(tmp.path().join("ad-ig-story.png")).unwrap(),
            b"new"
        );
    }

    #[test]
    fn empty_batch_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let paths = save_assets(&[], tmp.path()).unwrap();
        assert!(paths.is_empty());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
