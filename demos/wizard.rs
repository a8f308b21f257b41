use cheeze_wizards::{Affinity, CheezeWizards, Environment, WizardQueryBuilder};

fn client_from_env() -> CheezeWizards {
    let key = std::env::var("CHEEZEWIZARDS_KEY").expect("CHEEZEWIZARDS_KEY must be set");
    let email = std::env::var("CHEEZEWIZARDS_EMAIL").expect("CHEEZEWIZARDS_EMAIL must be set");
    let environment: Environment = std::env::var("CHEEZEWIZARDS_ENV")
        .unwrap_or_default()
        .parse()
        .unwrap_or_default();

    CheezeWizards::with_environment(&key, &email, environment)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cw = client_from_env();

    match cw.get_wizard_by_id(5).await {
        Ok(wizard) => println!(
            "Wizard {}: power {} ({:?})",
            wizard.id, wizard.power, wizard.affinity
        ),
        Err(error) => println!("Error: {}", error),
    }

    let query = WizardQueryBuilder::default()
        .owner("0xF0128825b0c518858971d8521498769148137936")
        .affinity(Affinity::Water)
        .min_power("100000")
        .max_power("200000")
        .build()
        .unwrap();
    match cw.get_wizards_by_attributes(&query).await {
        Ok(wizards) => {
            for wizard in &wizards {
                let status = if wizard.is_eliminated() { "eliminated" } else { "active" };
                println!("{} owned by {} is {}", wizard.id, wizard.owner, status);
            }
        }
        Err(error) => println!("Error: {}", error),
    }
}
