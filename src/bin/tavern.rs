use tavern_treasure::config::Config;
use tavern_treasure::names::store_title;
use tavern_treasure::{Error, export, generate};

fn run() -> Result<(), Error> {
    let path = std::env::var("SHOP_CONFIG").unwrap_or_else(|_| "shop.toml".to_owned());
    let mut config = Config::load(&path)?;
    if let Ok(seed) = std::env::var("SHOP_SEED") {
        let seed = seed
            .parse::<u64>()
            .map_err(|err| Error::Custom(format!("SHOP_SEED `{seed}` is not a number: {err}")))?;
        config.generation.seed = Some(seed);
    }

    let catalogs = config.catalogs.load()?;
    let mut rng = config.generation.rng();
    let inventory = generate(&catalogs, &config.generation, &mut rng)?;
    let title = store_title(&config.names, &mut rng);

    println!("{title}");
    println!("Generated Store Inventory:");
    for (idx, entry) in inventory.iter().enumerate() {
        println!("{}. {} - Price: {}", idx + 1, entry.name, entry.price);
    }

    if let Ok(export_path) = std::env::var("SHOP_EXPORT") {
        std::fs::write(&export_path, export::to_csv(&title, &inventory)?)?;
        log::info!("Inventory written to {export_path}");
    }
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
