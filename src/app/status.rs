use crate::config::Config;
use crate::echo::StatusReport;

fn presence(configured: bool, model: &str) -> String {
    if configured {
        format!("configured ({model})")
    } else {
        "not configured".to_string()
    }
}

pub fn render_status(config: &Config) -> String {
    let report = StatusReport::from_config(config);
    let config_source = config
        .config_path
        .as_ref()
        .map_or_else(|| "(built-in defaults)".to_string(), |p| p.display().to_string());

    let lines = [
        "◆ Kindred Echo status".to_string(),
        String::new(),
        format!("Version      {}", env!("CARGO_PKG_VERSION")),
        format!("Config       {config_source}"),
        String::new(),
        format!("Mode         {}", report.mode),
        format!(
            "ECHO_MODE    {}",
            report.echo_mode.as_deref().unwrap_or("(unset)")
        ),
        format!("Debug        {}", config.echo.debug),
        format!(
            "OpenAI       {}",
            presence(report.has_openai_key, &config.openai.model)
        ),
        format!(
            "HuggingFace  {}",
            presence(report.has_huggingface_key, &config.huggingface.model)
        ),
        String::new(),
        format!(
            "Gateway      {}:{}",
            config.gateway.host, config.gateway.port
        ),
        format!("Origin       {}", config.gateway.allowed_origin),
    ];

    lines.join("\n")
}
