use super::DataStore;
use crate::error::{GreenbookError, Result};
use crate::model::Customer;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Customers stored as a JSON array in a single file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, reason: impl ToString) -> GreenbookError {
        GreenbookError::MalformedStore {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn persistence(&self, source: std::io::Error) -> GreenbookError {
        GreenbookError::Persistence {
            path: self.path.clone(),
            source,
        }
    }

    /// The file a save should replace. A symlinked store is written through
    /// to the file it points at, so the link itself survives.
    fn write_target(&self) -> PathBuf {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(&self.path)
                .or_else(|_| {
                    fs::read_link(&self.path).map(|link| parent_dir(&self.path).join(link))
                })
                .unwrap_or_else(|_| self.path.clone()),
            _ => self.path.clone(),
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn tmp_path(target: &Path, dir: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "customers.json".to_string());
    dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Customer>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no store file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.malformed(e))?;
        let customers: Vec<Customer> =
            serde_json::from_str(&content).map_err(|e| self.malformed(e))?;

        let mut seen = HashSet::with_capacity(customers.len());
        for customer in &customers {
            if customer.id == 0 {
                return Err(self.malformed("customer ids must be positive"));
            }
            if customer.name.trim().is_empty() {
                return Err(self.malformed(format!("customer {} has no name", customer.id)));
            }
            if !seen.insert(customer.id) {
                return Err(self.malformed(format!("duplicate customer id {}", customer.id)));
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            count = customers.len(),
            "loaded customers"
        );
        Ok(customers)
    }

    fn save(&mut self, customers: &[Customer]) -> Result<()> {
        let target = self.write_target();
        let dir = parent_dir(&target);
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| self.persistence(e))?;
        }

        let mut content = serde_json::to_string_pretty(customers)?;
        content.push('\n');

        // Write beside the target and rename over it, keeping its permissions.
        let tmp_file = tmp_path(&target, &dir);
        let written = fs::write(&tmp_file, content).and_then(|()| match fs::metadata(&target) {
            Ok(existing) => fs::set_permissions(&tmp_file, existing.permissions()),
            Err(_) => Ok(()),
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.persistence(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.persistence(e));
        }

        tracing::debug!(
            path = %self.path.display(),
            count = customers.len(),
            "saved customers"
        );
        Ok(())
    }
}
