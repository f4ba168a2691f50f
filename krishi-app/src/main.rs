use anyhow::{bail, Context, Result};
use krishi_core::Engine;
use krishi_schemas::{
    region::{Region, NEPALI_MONTHS},
    unit::UnitCategory,
};
use std::env;

mod loader;

const USAGE: &str = "\
Usage: krishi-app <data-dir> <command> [args]

Commands:
  crops                               list all known crops
  varieties <crop>                    named varieties of a crop
  month <month> <region>              crops sowable in a month (high/mid/terai)
  search <query>                      free-text search over the crop table
  lookup <crop> [variety]             every record held for a key
  ph <vegetable>                      optimal soil pH for a vegetable
  guide <crop>                        nutrient requirements of a crop
  plan <crop> <ropani>                fertilizer plan for a plot
  yield <crop> <ropani>               expected output for a plot
  convert <value> <from> <to> <area|weight>
  units <area|weight>                 known units of a category";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (data_dir, command, rest) = match args.as_slice() {
        [data_dir, command, rest @ ..] => (data_dir, command.as_str(), rest),
        _ => bail!("{USAGE}"),
    };

    let engine = Engine::new();
    let loader = loader::DirLoader::new(data_dir);
    if let Err(err) = engine.initialize(&loader) {
        // Partial data is still answerable; say so and keep going.
        tracing::warn!(error = %err, "continuing with a partial knowledge base");
    }

    run(&engine, command, rest)
}

fn run(engine: &Engine, command: &str, args: &[String]) -> Result<()> {
    match (command, args) {
        ("crops", []) => {
            for crop in engine.list_crops() {
                println!("{crop}");
            }
        }
        ("varieties", [crop]) => {
            for variety in engine.varieties(crop) {
                println!("{variety}");
            }
        }
        ("month", [month, region]) => {
            if !NEPALI_MONTHS.contains(&month.as_str()) {
                // The filter is exact substring containment; an off-vocabulary
                // token almost always means a spelling like "Asoj" vs "Ashwin".
                tracing::warn!(%month, "token is not one of the Nepali month names");
            }
            let region = Region::from_query(region);
            for profile in engine.by_month(month, region) {
                if profile.variety.is_empty() {
                    println!("{}", profile.crop);
                } else {
                    println!("{} - {}", profile.crop, profile.variety);
                }
            }
        }
        ("search", [query]) => {
            let hits = engine.search(query);
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        ("lookup", [crop]) => print_lookup(engine, crop, None)?,
        ("lookup", [crop, variety]) => print_lookup(engine, crop, Some(variety.as_str()))?,
        ("ph", [vegetable]) => match engine.lookup_ph(vegetable) {
            Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
            None => bail!("no pH record for '{vegetable}'"),
        },
        ("guide", [crop]) => match engine.nutrient_guide(crop) {
            Some(guide) => println!("{}", serde_json::to_string_pretty(&guide)?),
            None => bail!("crop '{crop}' not found"),
        },
        ("plan", [crop, ropani]) => {
            let land: f64 = ropani
                .parse()
                .with_context(|| format!("'{ropani}' is not a number"))?;
            let plan = engine.fertilizer_plan(crop, land)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        ("yield", [crop, ropani]) => {
            let land: f64 = ropani
                .parse()
                .with_context(|| format!("'{ropani}' is not a number"))?;
            println!("{:.0}", engine.estimate_yield(crop, land));
        }
        ("convert", [value, from, to, category]) => {
            let value: f64 = value
                .parse()
                .with_context(|| format!("'{value}' is not a number"))?;
            let category = match category.as_str() {
                "area" => UnitCategory::Area,
                "weight" => UnitCategory::Weight,
                other => bail!("unknown category '{other}', expected area or weight"),
            };
            println!("{}", engine.convert_unit(value, from, to, category)?);
        }
        ("units", [category]) => {
            let category = match category.as_str() {
                "area" => UnitCategory::Area,
                "weight" => UnitCategory::Weight,
                other => bail!("unknown category '{other}', expected area or weight"),
            };
            for def in engine.units().definitions(category) {
                println!("{}\t{}\t{}", def.id, def.symbol, def.to_base);
            }
        }
        _ => bail!("{USAGE}"),
    }
    Ok(())
}

fn print_lookup(engine: &Engine, crop: &str, variety: Option<&str>) -> Result<()> {
    match engine.lookup(crop, variety) {
        Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        None => bail!("no records for '{crop}'"),
    }
    Ok(())
}
