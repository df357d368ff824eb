use clap::Parser;
use modelo_demo::config::CliConfig;
use modelo_demo::core::generator::{self, ThreadRngRating};
use modelo_demo::core::view;
use modelo_demo::domain::model::CompatibilityRequest;
use modelo_demo::domain::ports::{Delay, Presenter};
use modelo_demo::utils::{logger, validation::Validate};
use modelo_demo::{
    CompatibilityClient, DemoEngine, DemoOutfitGenerator, TerminalPresenter, TokioDelay,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting modelo-demo CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let presenter = TerminalPresenter;
    let outfit_generator = DemoOutfitGenerator::new(config.clone(), TokioDelay);
    let engine = DemoEngine::new(outfit_generator, presenter);

    let suggestions = engine.run(&config.occasion, &config.weather).await;
    println!("✅ Generated {} outfit suggestions", suggestions.len());

    // 模擬第一張卡片的儲存與評分互動
    if let Some(first) = suggestions.first() {
        let ack = generator::save(first);
        tracing::debug!("💾 Save acknowledged at {}", ack.saved_at);
        let save = view::save_action();
        presenter.render_line(&save.active_label);
        TokioDelay.wait(save.hold).await;
        presenter.render_line(&save.idle_label);

        let rating = generator::rate(first, &ThreadRngRating);
        let rate = view::rate_action(&rating);
        presenter.render_line(&rate.active_label);
        TokioDelay.wait(rate.hold).await;
        presenter.render_line(&rate.idle_label);
    }

    // 只在提供兩個顏色時呼叫相容性分析
    if let [color1, color2] = config.colors.as_slice() {
        let client = CompatibilityClient::from_config(&config);

        match client.health().await {
            Ok(health) => tracing::info!("💚 {} is {}", health.service, health.status),
            Err(e) => tracing::warn!("🔶 Health probe failed: {}", e),
        }

        let request = CompatibilityRequest::new(color1.clone(), color2.clone());
        match client.check(&request).await {
            Ok(result) => {
                presenter.render_compatibility(&view::compatibility_view(&result));
            }
            Err(e) => {
                // 連線錯誤不視為致命，呈現錯誤卡片後正常結束
                tracing::error!(
                    "❌ Compatibility check failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                presenter.render_error(&view::connection_error_card(&e));
            }
        }
    }

    Ok(())
}
