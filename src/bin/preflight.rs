use odetofood::infra::config;
use odetofood::infra::logging;
use odetofood::DatabaseService;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           DATABASE_MAX_CONNECTIONS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    logging::init();

    // Force-read config (nice error messages if missing)
    let db_config = match config::database_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("> Preflight: {}", e);
            usage_and_exit();
        }
    };

    println!("> Preflight:");
    println!("  DATABASE_MAX_CONNECTIONS={}", db_config.max_connections);

    let db_service = DatabaseService::connect(&db_config).await?;
    db_service.ping().await?;
    println!("  Database reachable, migrations applied");

    let (restaurants, reviews) = db_service.counts().await?;
    println!("  restaurants={} reviews={}", restaurants, reviews);

    println!("> Preflight OK");
    Ok(())
}
