//! 文件服务：打开/保存当前文档

use super::local::LocalFileProvider;
use crate::kernel::services::ports::file::{FileError, FileProvider, Result};
use std::path::Path;

pub struct FileService {
    provider: Box<dyn FileProvider>,
}

impl FileService {
    pub fn new() -> Self {
        Self::with_provider(Box::new(LocalFileProvider::new()))
    }

    pub fn with_provider(provider: Box<dyn FileProvider>) -> Self {
        Self { provider }
    }

    pub fn scheme(&self) -> &'static str {
        self.provider.scheme()
    }

    /// 打开文档；文件不存在时得到空文本（路径仍然保留，保存时创建）
    pub fn open_document(&self, path: &Path) -> Result<String> {
        match self.provider.read_file(path) {
            Ok(content) => {
                tracing::info!(path = %path.display(), bytes = content.len(), "document loaded");
                Ok(content)
            }
            Err(FileError::NotFound(_)) => {
                tracing::info!(path = %path.display(), "document not found, starting empty");
                Ok(String::new())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "document load failed");
                Err(e)
            }
        }
    }

    pub fn save_document(&self, path: &Path, content: &str) -> Result<()> {
        self.provider.write_file(path, content).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "document save failed");
            e
        })?;
        tracing::info!(path = %path.display(), bytes = content.len(), "document saved");
        Ok(())
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/service.rs"]
mod tests;
