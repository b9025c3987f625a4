/// Embed 消息发送示例
///
/// 本示例展示 Discord Webhook SDK 的基本使用方法，包括：
/// - 从环境变量 (或 .env 文件) 读取 DISCORD_WEBHOOK_URL
/// - 设置用户名、头像和正文
/// - 构建带字段的 Embed 面板并发送

use discord_webhook_sdk::{Color, EmbedPanel, MessagePayload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    dotenv::dotenv().ok();
    env_logger::init();

    println!("=== Discord Webhook SDK Embed 示例 ===");

    let mut payload = MessagePayload::from_env()?;
    payload
        .set_username("Status Bot")
        .set_avatar_url("https://cdn.discordapp.com/embed/avatars/0.png")
        .set_content("部署状态更新");

    let mut panel = EmbedPanel::new();
    panel
        .set_author(Some("CI"), Some("https://github.com"), None)
        .set_title("构建成功")
        .set_description("main 分支已部署到生产环境")
        .set_color("#2ecc71".parse::<Color>()?)
        .set_footer(Some("discord_webhook_sdk"), None)
        .add_field("耗时", "42s", true)
        .add_field("提交", "a1b2c3d", true);

    payload.add_embed_panels([panel]);

    println!("请求体: {}", payload.to_json_string()?);

    match payload.deliver().await {
        Ok(()) => println!("消息发送成功"),
        Err(e) => println!("消息发送失败: {}", e),
    }

    Ok(())
}
