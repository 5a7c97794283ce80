use bytes::Bytes;
use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;
use std::io;
use std::path::Path;

/// Key used to detect the same file being selected twice.
///
/// Contents are never hashed: two distinct files sharing a name and a
/// modification timestamp are treated as the same attachment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub name: String,
    pub last_modified: DateTime<Utc>,
}

/// A file picked for upload together with the metadata the form displays.
#[derive(Clone)]
pub struct AttachedFile {
    name: String,
    last_modified: DateTime<Utc>,
    contents: Bytes,
}

impl AttachedFile {
    pub fn new(
        name: impl Into<String>,
        last_modified: DateTime<Utc>,
        contents: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            last_modified,
            contents: contents.into(),
        }
    }

    /// Read a file from disk, keeping its name and modification time.
    ///
    /// The timestamp is truncated to milliseconds, the resolution file pickers report.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{}' does not name a file", path.display()),
                )
            })?;

        let metadata = tokio::fs::metadata(path).await?;
        let last_modified = DateTime::<Utc>::from(metadata.modified()?).trunc_subsecs(3);
        let contents = tokio::fs::read(path).await?;

        Ok(Self::new(name, last_modified, contents))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    pub fn size(&self) -> u64 {
        self.contents.len() as u64
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// The payload as a shared buffer; cloning it does not copy the bytes.
    pub fn shared_contents(&self) -> Bytes {
        self.contents.clone()
    }

    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            name: self.name.clone(),
            last_modified: self.last_modified,
        }
    }

    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

impl fmt::Debug for AttachedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedFile")
            .field("name", &self.name)
            .field("last_modified", &self.last_modified)
            .field("size", &self.size())
            .finish()
    }
}
