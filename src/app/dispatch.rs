use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing::info;

use crate::Config;
use crate::app::status::render_status;
use crate::app::verify::{VerifyOptions, VerifyOutcome, verify_deployment};
use crate::echo::{EchoService, ErrorBody, StatusReport};
use crate::llm::build_provider_client_with_timeout;

async fn run_reflect(config: &Config, text: &str, debug: bool) -> Result<()> {
    let service = EchoService::from_config(config);
    match service.reflect(text, debug).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(failure) => {
            let body = ErrorBody::from(failure);
            println!("{}", serde_json::to_string_pretty(&body)?);
            bail!("reflection failed: {}", body.error)
        }
    }
}

async fn run_verify(config: &Config, options: VerifyOptions) -> Result<()> {
    let client = build_provider_client_with_timeout(config.echo.provider_timeout_secs);
    info!(url = %options.url, "verifying deployed echo endpoint");

    match verify_deployment(&client, &options)
        .await
        .context("verification request failed")?
    {
        VerifyOutcome::Live { model, reflection } => {
            println!("✅ Echo API live check passed");
            println!("Model: {model}");
            println!("Reflection: {reflection}");
            Ok(())
        }
        VerifyOutcome::Degraded { body } => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            bail!(
                "Echo API responded, but the reflection looks mock or invalid (expected model containing {:?})",
                options.expect_model
            )
        }
    }
}

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or(config.gateway.port);
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            if port == 0 {
                info!("Starting Kindred Echo on {host} (random port)");
            } else {
                info!("Starting Kindred Echo on {host}:{port}");
            }
            crate::transport::gateway::run_gateway(&host, port, Arc::clone(&config)).await
        }

        Commands::Status { json } => {
            if json {
                let report = StatusReport::from_config(&config);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render_status(&config));
            }
            Ok(())
        }

        Commands::Reflect { text, debug } => run_reflect(&config, &text, debug).await,

        Commands::Verify {
            url,
            text,
            expect_model,
        } => {
            run_verify(
                &config,
                VerifyOptions {
                    url,
                    text,
                    expect_model,
                },
            )
            .await
        }
    }
}
