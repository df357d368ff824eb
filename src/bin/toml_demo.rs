use clap::Parser;
use modelo_demo::config::toml_config::TomlConfig;
use modelo_demo::core::view;
use modelo_demo::domain::model::CompatibilityRequest;
use modelo_demo::domain::ports::{ConfigProvider, Presenter};
use modelo_demo::utils::error::ErrorSeverity;
use modelo_demo::utils::{logger, validation::Validate};
use modelo_demo::{CompatibilityClient, DemoEngine, DemoOutfitGenerator, TerminalPresenter, TokioDelay};

#[derive(Parser)]
#[command(name = "toml-demo")]
#[command(about = "Modelo demo client with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "demo-config.toml")]
    config: String,

    /// Occasion to generate suggestions for
    #[arg(long, default_value = "casual")]
    occasion: String,

    /// Weather selection (accepted, currently unused by the generator)
    #[arg(long, default_value = "mild")]
    weather: String,

    /// Two colors to run through the compatibility check
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,

    /// Override simulated latency from config (milliseconds)
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON logs instead of the compact format
    #[arg(long)]
    json_logs: bool,

    /// Dry run - show what would happen without calling anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based demo client");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(latency) = args.latency_ms {
        config.generator.latency_ms = Some(latency);
        tracing::info!("🔧 Simulated latency overridden to: {}ms", latency);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No suggestions or API calls will be made");
        return Ok(());
    }

    let presenter = TerminalPresenter;
    let generator = DemoOutfitGenerator::new(config.clone(), TokioDelay);
    let engine = DemoEngine::new(generator, presenter);

    let suggestions = engine.run(&args.occasion, &args.weather).await;
    println!("✅ Generated {} outfit suggestions", suggestions.len());

    if let [color1, color2] = args.colors.as_slice() {
        let client = CompatibilityClient::from_config(&config);
        let request = CompatibilityRequest::new(color1.clone(), color2.clone());

        match client.check(&request).await {
            Ok(result) => presenter.render_compatibility(&view::compatibility_view(&result)),
            Err(e) => {
                tracing::error!("❌ Compatibility check failed: {}", e);
                presenter.render_error(&view::connection_error_card(&e));
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Demo: {} v{}", config.demo.name, config.demo.version);
    println!("  API base URL: {}", config.api_base_url());
    println!("  Request timeout: {}s", config.request_timeout_secs());
    println!("  Simulated latency: {}ms", config.demo_latency_ms());
    println!("  Max suggestions: {}", config.max_suggestions());
    println!("  Occasion: {}", args.occasion);
    println!("  Weather: {} (not used for selection yet)", args.weather);

    if !args.colors.is_empty() {
        println!("  Colors: {}", args.colors.join(" + "));
    }

    if config.monitoring_enabled() {
        println!(
            "  Monitoring: enabled (log level {})",
            config.log_level().unwrap_or("info")
        );
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
