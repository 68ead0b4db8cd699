use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 答卷文件后缀（区分大小写）
pub const PDF_SUFFIX: &str = ".pdf";

/// 扫描目录，返回所有以 `.pdf` 结尾的文件路径（按文件名排序）
///
/// 子目录和非 PDF 文件会被忽略
pub async fn scan_submissions(folder: &Path) -> AppResult<Vec<PathBuf>> {
    if !fs::metadata(folder).await.map(|m| m.is_dir()).unwrap_or(false) {
        return Err(AppError::InputDirNotFound {
            path: folder.to_path_buf(),
        });
    }

    let mut submissions = Vec::new();
    let mut entries = fs::read_dir(folder).await?;

    while let Some(entry) = entries.next_entry().await? {
        let is_pdf = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(PDF_SUFFIX));
        if !is_pdf {
            continue;
        }

        if entry.file_type().await?.is_dir() {
            tracing::debug!("忽略目录: {}", entry.path().display());
            continue;
        }

        submissions.push(entry.path());
    }

    submissions.sort();
    Ok(submissions)
}
