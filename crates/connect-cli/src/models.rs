//! # Models CLI: list the models `connect check` accepts.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use connect_models::registry;

/// Arguments for `connect models`.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Emit the listing as a JSON array.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ModelListing {
    name: &'static str,
    type_name: &'static str,
    schema: String,
}

fn listings() -> Vec<ModelListing> {
    registry()
        .iter()
        .map(|entry| ModelListing {
            name: entry.name,
            type_name: entry.type_name,
            schema: entry.describe(),
        })
        .collect()
}

/// Execute `connect models`.
pub fn run_models(args: &ModelsArgs) -> Result<u8> {
    let listings = listings();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(0);
    }

    let width = listings.iter().map(|l| l.name.len()).max().unwrap_or(0);
    for listing in &listings {
        println!("{:width$}  {}", listing.name, listing.type_name);
    }
    println!();
    println!("Total: {} models", listings.len());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_covers_registry() {
        let listings = listings();
        assert_eq!(listings.len(), registry().len());
        let payment = listings.iter().find(|l| l.name == "payment").unwrap();
        assert_eq!(payment.type_name, "Payment");
        assert_eq!(payment.schema, "object Payment");
    }

    #[test]
    fn listing_serializes_with_snake_case_keys() {
        let value = serde_json::to_value(&listings()[0]).unwrap();
        assert_eq!(value["name"], "adjust-loyalty-points-response");
        assert_eq!(value["type_name"], "AdjustLoyaltyPointsResponse");
    }

    #[test]
    fn run_models_succeeds() {
        assert_eq!(run_models(&ModelsArgs { json: false }).unwrap(), 0);
        assert_eq!(run_models(&ModelsArgs { json: true }).unwrap(), 0);
    }
}
