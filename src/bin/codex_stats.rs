//! Terminal companion: fetch the character list and print the distribution
//! tables the overview page charts.

use anyhow::Result;

use hogwarts_codex::data::charts;
use hogwarts_codex::data::fetch;
use hogwarts_codex::data::model::REFERENCE_YEAR;

fn main() -> Result<()> {
    env_logger::init();

    let records = fetch::fetch_characters(fetch::CHARACTERS_ENDPOINT)?;
    let data = charts::aggregate(&records);

    println!("{} characters\n", records.len());

    println!("Gender distribution:");
    for (bucket, count) in &data.by_gender {
        println!("  {bucket:<12} {count:>4}");
    }

    println!("\nHouse distribution:");
    for (bucket, count) in &data.by_house {
        println!("  {bucket:<12} {count:>4}");
    }

    println!("\nAge distribution (at {REFERENCE_YEAR}):");
    for (age, count) in &data.by_age {
        println!("  {age:>3}  {}", "#".repeat(*count));
    }

    Ok(())
}
