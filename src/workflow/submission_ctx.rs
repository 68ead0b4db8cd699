//! 答卷处理上下文
//!
//! 封装"我正在处理第几份答卷、哪个文件"这一信息

use std::fmt::Display;
use std::path::{Path, PathBuf};

/// 答卷处理上下文
#[derive(Debug, Clone)]
pub struct SubmissionCtx {
    /// 答卷在本次运行中的序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 答卷完整路径
    pub path: PathBuf,

    /// 原始文件名（含 `.pdf`）
    pub file_name: String,
}

impl SubmissionCtx {
    /// 创建新的答卷上下文
    pub fn new(index: usize, path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            index,
            path: path.to_path_buf(),
            file_name,
        }
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[答卷 #{} {}]", self.index, self.file_name)
    }
}
