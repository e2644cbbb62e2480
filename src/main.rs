//! Bloom Objectives - Learning Objectives Generator
//!
//! Command-line and web front-end for turning course goals into learning objectives.

use bloom_objectives::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for more)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run().await
}
