use packdraw::{Catalog, Rarity};

const CATALOG: &str = r#"{
    "packs": [{
        "id": "pack_nature_basic",
        "name": "Nature Basic",
        "description": "Starter bundle",
        "price": 10,
        "weights": { "common": 70, "rare": 20, "epic": 8, "legendary": 2 },
        "items": [
            { "id": "leaf",    "name": "Leaf",    "tier": "COMMON" },
            { "id": "acorn",   "name": "Acorn",   "tier": "COMMON" },
            { "id": "pebble",  "name": "Pebble",  "tier": "COMMON" },
            { "id": "fern",    "name": "Fern",    "tier": "RARE" },
            { "id": "moss",    "name": "Moss",    "tier": "RARE" },
            { "id": "orchid",  "name": "Orchid",  "tier": "EPIC" },
            { "id": "sequoia", "name": "Sequoia", "tier": "LEGENDARY" }
        ]
    }]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::from_json_str(CATALOG)?;
    catalog.validate()?;
    let pack = catalog.get("pack_nature_basic").expect("pack in catalog");

    let mut rng = rand::rng();

    println!("5 draws from `{}`:", pack.name);
    for _ in 0..5 {
        let drawn = pack.draw(&mut rng)?;
        println!("  {:<10} {}", drawn.tier.to_string(), drawn.name);
    }

    let trials = 100_000;
    let tally = pack.simulate(trials, &mut rng)?;

    println!("\n{trials} simulated draws, observed vs configured:");
    for (tier, count) in tally.iter() {
        println!(
            "  {:<10} {count:>7}  {:>6.2}%  (configured {:>5.1}%)",
            tier.to_string(),
            tally.observed_pct(tier),
            pack.weights.weight(tier),
        );
    }

    Ok(())
}
