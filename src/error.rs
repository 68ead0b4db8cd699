use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
///
/// 除隔离模式下的 `DocumentRead` / `MalformedHeader` 外，所有错误都会终止整次运行
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入目录不存在
    #[error("输入路径下没有文件夹: {}", path.display())]
    InputDirNotFound { path: PathBuf },

    /// 输出目录不存在
    #[error("输出路径下没有文件夹: {}", path.display())]
    OutputDirNotFound { path: PathBuf },

    /// 无法将文件读取为 PDF 文档
    #[error("无法读取文档 {}: {reason}", path.display())]
    DocumentRead { path: PathBuf, reason: String },

    /// 卷头缺少 `Full name:` 标记
    #[error("卷头缺少 \"Full name:\" 标记: {}", path.display())]
    MalformedHeader { path: PathBuf },

    /// 写入输出文件失败
    #[error("写入文件失败 {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 其他 IO 错误（目录遍历等）
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文档读取错误
    pub fn document_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AppError::DocumentRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// 创建写入错误
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Write {
            path: path.into(),
            source,
        }
    }

    /// 隔离模式下可以跳过的错误（只影响单个答卷）
    pub fn is_per_submission(&self) -> bool {
        matches!(
            self,
            AppError::DocumentRead { .. } | AppError::MalformedHeader { .. }
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
