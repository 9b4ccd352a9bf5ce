use std::{fs, path::Path};

use anyhow::Context;
use bytes::Bytes;

/// The single image currently chosen for upload.
///
/// The MIME type comes from sniffing the file content, not the extension;
/// anything the `image` crate cannot identify is filtered out the same way
/// a browse dialog with an `image/*` filter would refuse to offer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Bytes,
    pub mime: &'static str,
}

impl SelectedFile {
    /// Returns `None` when the bytes do not sniff as a known image format.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Bytes>) -> Option<Self> {
        let bytes = bytes.into();
        let format = image::guess_format(&bytes).ok()?;
        Some(Self {
            name: name.into(),
            bytes,
            mime: format.to_mime_type(),
        })
    }

    /// Reads `path` and sniffs it. Unreadable paths are an error; readable
    /// non-images are `None`.
    pub fn from_path(path: &Path) -> anyhow::Result<Option<Self>> {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_bytes(name, bytes))
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }
}

/// Resolves a pick event carrying any number of candidates to at most one
/// selection: the first candidate that is an image wins, the rest are
/// discarded silently (a warn log is the only trace).
pub fn pick_first<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Option<SelectedFile>> {
    let mut picked = None;

    for path in paths {
        let path = path.as_ref();
        if picked.is_some() {
            log::warn!("discarding extra file {}", path.display());
            continue;
        }
        match SelectedFile::from_path(path)? {
            Some(file) => {
                log::debug!("selected {} ({})", file.name, file.mime);
                picked = Some(file);
            }
            None => log::warn!("discarding non-image file {}", path.display()),
        }
    }

    Ok(picked)
}

/// Encodes a tiny in-memory PNG, used as a stand-in for a real photo.
#[cfg(test)]
pub(crate) fn tiny_png() -> Vec<u8> {
    use std::io::Cursor;

    let img = image::RgbaImage::new(2, 2);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encoding a 2x2 png cannot fail");
    buf.into_inner()
}
