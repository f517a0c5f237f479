//! Development seeder
//!
//! Populates the catalog with a handful of hotels and events so the API
//! has something to serve locally. Skips seeding when the catalog is
//! already non-empty, so it is safe to run repeatedly.
//!
//! ```bash
//! cargo run -p wanderstay-api --bin wanderstay-seed
//! ```

use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wanderstay_api::config::Config;
use wanderstay_shared::{
    db::{migrations, pool},
    models::{
        event::{CreateEvent, Event},
        hotel::{CreateHotel, Hotel, HotelImage},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wanderstay_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    migrations::ensure_database_exists(&config.database.url).await?;

    let db = pool::create_pool(pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: 2,
        min_connections: 1,
        ..Default::default()
    })
    .await?;

    migrations::run_migrations(&db).await?;

    if Hotel::count(&db).await? > 0 {
        tracing::info!("Catalog already seeded, nothing to do");
        pool::close_pool(db).await;
        return Ok(());
    }

    for hotel in sample_hotels() {
        let created = Hotel::create(&db, hotel).await?;
        tracing::info!(id = %created.id, name = %created.name, "Seeded hotel");
    }

    for event in sample_events() {
        let created = Event::create(&db, event).await?;
        tracing::info!(id = %created.id, name = %created.name, "Seeded event");
    }

    tracing::info!("Seeding complete");
    pool::close_pool(db).await;

    Ok(())
}

fn sample_hotels() -> Vec<CreateHotel> {
    vec![
        CreateHotel {
            name: "Harborview Grand".to_string(),
            city: "Lisbon".to_string(),
            price: 185.0,
            capacity: 4,
            description: "A waterfront classic with sweeping views over the Tagus.".to_string(),
            images: vec![HotelImage {
                url: "https://images.wanderstay.dev/harborview-grand.jpg".to_string(),
                alt: "Harborview Grand facade at dusk".to_string(),
            }],
        },
        CreateHotel {
            name: "Pinegrove Lodge".to_string(),
            city: "Innsbruck".to_string(),
            price: 142.0,
            capacity: 6,
            description: "Alpine lodge minutes from the lifts, sauna included.".to_string(),
            images: vec![HotelImage {
                url: "https://images.wanderstay.dev/pinegrove-lodge.jpg".to_string(),
                alt: "Snow-covered lodge among pine trees".to_string(),
            }],
        },
        CreateHotel {
            name: "Casa del Sol".to_string(),
            city: "Valencia".to_string(),
            price: 98.0,
            capacity: 2,
            description: "A quiet courtyard hotel in the old town.".to_string(),
            images: vec![],
        },
    ]
}

fn sample_events() -> Vec<CreateEvent> {
    let now = Utc::now();
    vec![
        CreateEvent {
            name: "Riverside Jazz Nights".to_string(),
            description: "Three stages of jazz along the riverfront.".to_string(),
            location: "Lisbon Riverfront".to_string(),
            starts_at: now + Duration::days(21),
            price: 35.0,
            capacity: 500,
            image_url: Some("https://images.wanderstay.dev/jazz-nights.jpg".to_string()),
            image_alt: Some("Stage lit up at night by the river".to_string()),
        },
        CreateEvent {
            name: "Alpine Food Market".to_string(),
            description: "Regional producers, tastings, and live cooking.".to_string(),
            location: "Innsbruck Marktplatz".to_string(),
            starts_at: now + Duration::days(9),
            price: 12.5,
            capacity: 800,
            image_url: None,
            image_alt: None,
        },
        CreateEvent {
            name: "Old Town Running Tour".to_string(),
            description: "Guided 10k through Valencia's historic center.".to_string(),
            location: "Valencia Old Town".to_string(),
            starts_at: now + Duration::days(35),
            price: 20.0,
            capacity: 60,
            image_url: None,
            image_alt: None,
        },
    ]
}
