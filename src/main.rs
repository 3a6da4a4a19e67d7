use poise::CreateReply;
use poise::serenity_prelude::CreateAttachment;
use serenity::prelude::*;
use std::fmt::Write;
use tavern_treasure::catalog::Catalogs;
use tavern_treasure::config::{Config, GenerationConfig, PercentageRange};
use tavern_treasure::names::{self, TavernNames};
use tavern_treasure::{InventoryEntry, export, inventory};

struct Data {
    catalogs: Catalogs,
    generation: GenerationConfig,
    names: TavernNames,
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

const MESSAGE_LIMIT: usize = 2000;

fn override_range(range: &mut PercentageRange, low: Option<f64>, high: Option<f64>) {
    if let Some(low) = low {
        range.low = low;
    }
    if let Some(high) = high {
        range.high = high;
    }
}

fn listing(title: &str, entries: &[InventoryEntry]) -> Result<String, std::fmt::Error> {
    let mut message = String::new();
    writeln!(&mut message, "**{title}**")?;
    if entries.is_empty() {
        writeln!(&mut message, "The shelves are bare today.")?;
    }
    for (i, entry) in entries.iter().enumerate() {
        let line = format!("{}. {} - {}\n", i + 1, entry.name, entry.price);
        // leave room for the trailer below
        if message.len() + line.len() + 64 > MESSAGE_LIMIT {
            write!(
                &mut message,
                "...and {} more in the attached file.",
                entries.len() - i
            )?;
            break;
        }
        message.push_str(&line);
    }
    Ok(message)
}

/// Stock a fresh shop from the item catalogs.
///
/// Every range is a percentage. Anything left out uses the configured default.
#[poise::command(slash_command, prefix_command)]
async fn shop(
    ctx: Context<'_>,
    #[description = "Pet percentage low"] pet_low: Option<f64>,
    #[description = "Pet percentage high"] pet_high: Option<f64>,
    #[description = "Magic item percentage low"] magic_low: Option<f64>,
    #[description = "Magic item percentage high"] magic_high: Option<f64>,
    #[description = "Consumable percentage low"] consumable_low: Option<f64>,
    #[description = "Consumable percentage high"] consumable_high: Option<f64>,
    #[description = "Price adjustment low"] price_low: Option<f64>,
    #[description = "Price adjustment high"] price_high: Option<f64>,
    #[description = "Number of items in shop low percent"] size_low: Option<f64>,
    #[description = "Number of items in shop high percent"] size_high: Option<f64>,
) -> Result<(), Error> {
    let data = ctx.data();
    let mut generation = data.generation.clone();
    override_range(&mut generation.pets, pet_low, pet_high);
    override_range(&mut generation.magic_items, magic_low, magic_high);
    override_range(&mut generation.consumables, consumable_low, consumable_high);
    override_range(&mut generation.price_adjustment, price_low, price_high);
    override_range(&mut generation.shop_size, size_low, size_high);

    log::info!("User requesting shop: {}", ctx.author().name);
    log::debug!("generation={:#?}", generation);

    let rolled = {
        let mut rng = generation.rng();
        inventory::generate(&data.catalogs, &generation, &mut rng)
            .map(|entries| (names::store_title(&data.names, &mut rng), entries))
    };
    let (title, entries) = match rolled {
        Ok(rolled) => rolled,
        Err(error) => {
            log::warn!("Shop generation failed: {}", error);
            ctx.send(
                CreateReply::default()
                    .content(error.to_string())
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }
    };

    let csv = export::to_csv(&title, &entries)?;
    ctx.send(
        CreateReply::default()
            .content(listing(&title, &entries)?)
            .attachment(CreateAttachment::bytes(csv, export::FILE_NAME)),
    )
    .await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let path = std::env::var("SHOP_CONFIG").unwrap_or_else(|_| "shop.toml".to_owned());
    let config = Config::load(&path).expect("SHOP_CONFIG must point to a valid configuration");
    let catalogs = config
        .catalogs
        .load()
        .expect("catalogs listed in the configuration must be readable");
    log::info!("{} catalog items loaded", catalogs.total_len());

    println!(
        "To add this bot to a server:\n\thttps://discord.com/api/oauth2/authorize?client_id={}&permissions=34816&scope=bot%20applications.commands",
        std::env::var("DISCORD_APPLICATION_ID").expect("DISCORD_APPLICATION_ID is required")
    );

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![shop()],
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(Data {
                    catalogs,
                    generation: config.generation,
                    names: config.names,
                })
            })
        })
        .build();

    let token = std::env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN is required");
    let client = serenity::Client::builder(token, GatewayIntents::non_privileged())
        .framework(framework)
        .await;
    client.unwrap().start().await.unwrap();
}
