use service_seeder::config::Config;
use service_seeder::http_client::RestClient;
use service_seeder::services::ServiceSeederImpl;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (stderr, so stdout only carries the status lines)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "service_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!("SUPABASE_KEY is not set, requests will be sent unauthenticated");
    }
    tracing::info!("Seeding against {}", config.supabase_url);

    let client = RestClient::new(&config)?;
    let seeder = ServiceSeederImpl::new(client);
    tracing::info!("Target organization slug: {}", seeder.slug());

    // Logical failures are reported, never turned into a non-zero exit
    let outcome = seeder.run().await?;
    println!("{}", outcome);

    Ok(())
}
