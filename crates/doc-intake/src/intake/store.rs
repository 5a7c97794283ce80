use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::files::{AttachedFile, IdentityKey};

/// Ordered file lists keyed by field id.
///
/// Within one field no two files share an [`IdentityKey`]; every mutation
/// preserves that.
#[derive(Debug, Clone, Default)]
pub struct AttachmentStore {
    fields: BTreeMap<String, Vec<AttachedFile>>,
}

impl AttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field's files, keeping the first of any duplicates.
    ///
    /// Returns how many files the field now holds.
    pub fn set_files<I>(&mut self, field_id: &str, files: I) -> usize
    where
        I: IntoIterator<Item = AttachedFile>,
    {
        let kept = retain_new(field_id, files, HashSet::new());
        let count = kept.len();
        if kept.is_empty() {
            self.fields.remove(field_id);
        } else {
            self.fields.insert(field_id.to_string(), kept);
        }
        count
    }

    /// Append files after the field's current ones, skipping any already present.
    ///
    /// Returns how many files were appended.
    pub fn append_files<I>(&mut self, field_id: &str, files: I) -> usize
    where
        I: IntoIterator<Item = AttachedFile>,
    {
        let existing: HashSet<IdentityKey> = self
            .files(field_id)
            .iter()
            .map(AttachedFile::identity_key)
            .collect();
        let fresh = retain_new(field_id, files, existing);
        let count = fresh.len();
        if count > 0 {
            self.fields
                .entry(field_id.to_string())
                .or_default()
                .extend(fresh);
        }
        count
    }

    /// File-picker behavior: the first selection sets the field, later ones append.
    pub fn attach<I>(&mut self, field_id: &str, files: I) -> usize
    where
        I: IntoIterator<Item = AttachedFile>,
    {
        if self.len(field_id) == 0 {
            self.set_files(field_id, files)
        } else {
            self.append_files(field_id, files)
        }
    }

    /// Overwrite the file at `index`, returning the one it displaced.
    pub fn replace_at(
        &mut self,
        field_id: &str,
        index: usize,
        new_file: AttachedFile,
    ) -> Result<AttachedFile, AttachmentError> {
        let list = match self.fields.get_mut(field_id) {
            Some(list) if index < list.len() => list,
            other => {
                return Err(AttachmentError::OutOfRange {
                    field_id: field_id.to_string(),
                    index,
                    len: other.map_or(0, |list| list.len()),
                })
            }
        };

        let key = new_file.identity_key();
        let collides = list
            .iter()
            .enumerate()
            .any(|(position, file)| position != index && file.identity_key() == key);
        if collides {
            return Err(AttachmentError::DuplicateFile {
                field_id: field_id.to_string(),
                name: key.name,
            });
        }

        Ok(std::mem::replace(&mut list[index], new_file))
    }

    pub fn clear_field(&mut self, field_id: &str) {
        self.fields.remove(field_id);
    }

    pub fn clear_all(&mut self) {
        self.fields.clear();
    }

    pub fn files(&self, field_id: &str) -> &[AttachedFile] {
        self.fields
            .get(field_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self, field_id: &str) -> usize {
        self.files(field_id).len()
    }

    /// Total number of files held by the given fields.
    pub fn count_in<'a, I>(&self, field_ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        field_ids.into_iter().map(|id| self.len(id)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AttachedFile])> {
        self.fields
            .iter()
            .map(|(field_id, files)| (field_id.as_str(), files.as_slice()))
    }
}

fn retain_new<I>(field_id: &str, files: I, mut seen: HashSet<IdentityKey>) -> Vec<AttachedFile>
where
    I: IntoIterator<Item = AttachedFile>,
{
    files
        .into_iter()
        .filter(|file| {
            let fresh = seen.insert(file.identity_key());
            if !fresh {
                debug!(field_id, file = file.name(), "dropping duplicate attachment");
            }
            fresh
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("field '{field_id}' has no file at index {index} (holds {len})")]
    OutOfRange {
        field_id: String,
        index: usize,
        len: usize,
    },
    #[error("field '{field_id}' already holds a file named '{name}' with the same modification time")]
    DuplicateFile { field_id: String, name: String },
}
