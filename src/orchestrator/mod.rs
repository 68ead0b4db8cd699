//! 编排层
//!
//! - `batch_processor` - 批量答卷处理器：校验目录、扫描、并发解析、统一写出

pub mod batch_processor;

pub use batch_processor::{App, RunStats};
