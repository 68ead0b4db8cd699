//! 答案写入服务 - 业务能力层
//!
//! 只负责"把一份答卷拆成多个文件"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::Submission;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// 答案写入服务
///
/// 职责：
/// - 每道题写一个 `q{i}_{stem}.txt`
/// - 同名文件直接覆盖
/// - 第一次写入失败即停止该答卷剩余的写入
pub struct AnswerWriter {
    output_dir: PathBuf,
}

impl AnswerWriter {
    /// 创建新的写入服务
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 写出单份答卷的全部答案
    ///
    /// # 返回
    /// 返回写出的文件数量
    pub fn write_submission(&self, submission: &Submission) -> AppResult<usize> {
        for (index, answer) in submission.answers.iter().enumerate() {
            let path = self.output_dir.join(submission.output_file_name(index + 1));
            debug!("写入: {} ({} 字节)", path.display(), answer.len());

            fs::write(&path, submission.render_answer(answer))
                .map_err(|e| AppError::write_failed(path, e))?;
        }

        Ok(submission.answers.len())
    }

    /// 依次写出所有答卷
    pub fn write_all(&self, submissions: &[Submission]) -> AppResult<usize> {
        let mut written = 0;
        for submission in submissions {
            written += self.write_submission(submission)?;
        }
        Ok(written)
    }
}
