//! 文本提取器 - 基础设施层
//!
//! 只暴露"把一个文档变成纯文本"的能力

use crate::error::{AppError, AppResult};
use std::path::Path;
use tracing::debug;

/// 文本提取能力
///
/// 职责：
/// - 输入文档路径，输出按页顺序拼接的全文
/// - 不认识 Submission / 姓名 / 答案
/// - 调用返回前释放所有底层资源
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> AppResult<String>;
}

/// 基于 `pdf-extract` 的 PDF 文本提取器
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> AppResult<String> {
        let bytes = std::fs::read(path).map_err(|e| AppError::document_read(path, e))?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| AppError::document_read(path, e))?;

        debug!("{} 共 {} 页", path.display(), pages.len());

        // 页与页之间不插入分隔符
        Ok(pages.concat())
    }
}
