//! Smoke run against a live actress API: list everything, fetch a batch,
//! then fetch a single record. Start `mock-server` first, or point
//! `ACTRESS_API_URL` elsewhere.

use actress_core::{Actress, ActressFetcher, ClientConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), actress_core::ConfigError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "actress_demo=info,actress_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, policy = ?config.nationality_policy, "starting");
    let fetcher = ActressFetcher::from_config(&config);

    let all = fetcher.fetch_all().await;
    println!("All actresses ({}):", all.len());
    for actress in &all {
        print_actress(actress);
    }

    let some = fetcher.fetch_many(&[1, 2, 3]).await;
    println!("\nSome actresses ({}):", some.len());
    for actress in &some {
        print_actress(actress);
    }

    match fetcher.fetch_one(1).await {
        Some(actress) => {
            println!("\nSingle actress:");
            println!("{actress:#?}");
        }
        None => println!("\nSingle actress: none"),
    }
    Ok(())
}

fn print_actress(actress: &Actress) {
    let years = match actress.death_year {
        Some(death) => format!("{}-{death}", actress.birth_year),
        None => format!("b. {}", actress.birth_year),
    };
    println!(
        "  #{} {} ({years}, {}) known for {}",
        actress.id,
        actress.name,
        actress.nationality,
        actress.most_famous_movies.join(", ")
    );
}
