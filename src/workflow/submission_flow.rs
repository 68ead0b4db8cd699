//! 单份答卷处理流程 - 流程层
//!
//! 定义"一份答卷"的完整处理流程：提取文本 → 解析姓名和答案
//!
//! 写文件不在这里：必须等所有答卷都解析成功后由编排层统一写出

use crate::error::{AppError, AppResult};
use crate::infrastructure::TextExtractor;
use crate::models::Submission;
use crate::services::SubmissionParser;
use crate::utils::logging::truncate_text;
use crate::workflow::SubmissionCtx;
use std::sync::Arc;
use tracing::{debug, info};

/// 单份答卷处理流程
#[derive(Clone)]
pub struct SubmissionFlow {
    extractor: Arc<dyn TextExtractor>,
    parser: SubmissionParser,
}

impl SubmissionFlow {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            extractor,
            parser: SubmissionParser::new(),
        }
    }

    /// 提取并解析一份答卷
    pub async fn process(&self, ctx: &SubmissionCtx) -> AppResult<Submission> {
        debug!("{} 📄 正在提取文本...", ctx);
        let text = self.extract_text(ctx).await?;
        debug!("{} 提取完成，共 {} 个字符", ctx, text.chars().count());

        let parsed = self
            .parser
            .parse(&text)
            .map_err(|_| AppError::MalformedHeader {
                path: ctx.path.clone(),
            })?;

        info!(
            "{} ✓ {} - {} 道题",
            ctx,
            truncate_text(&parsed.identifier, 40),
            parsed.answers.len()
        );

        Ok(Submission::new(
            parsed.identifier,
            parsed.answers,
            &ctx.file_name,
        ))
    }

    /// 在阻塞线程池中提取文本，提取库内部 panic 也按读取失败处理
    async fn extract_text(&self, ctx: &SubmissionCtx) -> AppResult<String> {
        let extractor = Arc::clone(&self.extractor);
        let path = ctx.path.clone();

        tokio::task::spawn_blocking(move || extractor.extract(&path))
            .await
            .map_err(|e| AppError::document_read(&ctx.path, format!("提取任务异常终止: {}", e)))?
    }
}
