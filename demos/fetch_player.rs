use tracing_subscriber::EnvFilter;
use unite_scraper::UniteClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(name) = std::env::args().nth(1) else {
        eprintln!("usage: fetch_player <name-or-id>");
        std::process::exit(2);
    };

    let client = UniteClient::new();
    match client.get_player(&name).await {
        Ok(player) => println!("{}", serde_json::to_string_pretty(&player).unwrap()),
        Err(e) => {
            eprintln!("failed to fetch {name}: {e}");
            std::process::exit(1);
        }
    }
}
