use anyhow::{Context, Result};
use gitsoul::pages::profile::profile_page;
use gitsoul::{Config, Pipeline, ProfileError, ProfileRequest, Provider};
use std::fs;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::parse();

    // Provider and identity validation happen before any fetch; both map to
    // a not-found outcome.
    let provider: Provider = match config.provider.parse() {
        Ok(provider) => provider,
        Err(err) => exit_not_found(err),
    };

    let request = match ProfileRequest::new(provider, config.identity.clone()) {
        Ok(request) => request,
        Err(err) => exit_not_found(err),
    };

    let pipeline = Pipeline::new(Duration::from_secs(config.timeout))
        .context("Failed to initialize rendering pipeline")?;

    let fragment = match pipeline.render(&request).await {
        Ok(fragment) => fragment,
        Err(err) if err.is_not_found() => exit_not_found(err),
        Err(err) => return Err(err).context("Failed to fetch profile README"),
    };

    let page = profile_page(provider, &request.identity, &fragment);

    fs::write(&config.output, page.into_string())
        .with_context(|| format!("Failed to write profile page to {}", config.output.display()))?;

    println!("Generated: {}", config.output.display());

    Ok(())
}

/// Prints a short message and exits with the not-found code.
fn exit_not_found(err: ProfileError) -> ! {
    eprintln!("{err}");
    process::exit(2);
}
