use anyhow::Result;
use exam_splitter::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load();

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let _stats = App::initialize(config)?.run().await?;

    Ok(())
}
