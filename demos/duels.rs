use cheeze_wizards::{CheezeWizards, DuelQueryBuilder, Environment};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let key = std::env::var("CHEEZEWIZARDS_KEY").expect("CHEEZEWIZARDS_KEY must be set");
    let email = std::env::var("CHEEZEWIZARDS_EMAIL").expect("CHEEZEWIZARDS_EMAIL must be set");
    let environment: Environment = std::env::var("CHEEZEWIZARDS_ENV")
        .unwrap_or_default()
        .parse()
        .unwrap_or_default();
    let cw = CheezeWizards::with_environment(&key, &email, environment);

    match cw.get_duel_by_id(1).await {
        Ok(duel) => println!(
            "Duel {}: {} vs {} (timed out: {})",
            duel.id, duel.wizard1_id, duel.wizard2_id, duel.timed_out
        ),
        Err(error) => println!("Error: {}", error),
    }

    let query = DuelQueryBuilder::default()
        .wizard_ids(vec![String::from("5991"), String::from("5993")])
        .exclude_in_progress(false)
        .exclude_finished(true)
        .start_block_from(4943216u64)
        .build()
        .unwrap();
    match cw.get_duels_by_attributes(&query).await {
        Ok(duels) => println!("Found {} duels", duels.len()),
        Err(error) => println!("Error: {}", error),
    }
}
