//! Basic usage example for thaiaddr-rs
//!
//! This example demonstrates how to:
//! - Load the reference table (with the binary cache)
//! - Walk the province → district → subdistrict hierarchy
//! - Look up and suggest postal codes

use anyhow::Result;
use thaiaddr_core::prelude::*;

fn main() -> Result<()> {
    println!("=== thaiaddr-rs Basic Usage Example ===\n");

    println!("Loading reference table...");
    let path = ReferenceTable::default_data_path();
    let table = ReferenceTable::load_from_path(&path)?;
    println!("✓ Loaded {} records from {}\n", table.len(), path.display());
    let records = table.records();

    // Example 1: Provinces in both locales
    println!("--- Example 1: Provinces ---");
    for p in records.unique_provinces(Locale::Th) {
        println!("{:>3}  {} / {}", p.code, p.label(Locale::Th), p.label(Locale::En));
    }
    println!();

    // Example 2: Districts and subdistricts of Bangkok
    println!("--- Example 2: Districts of Bangkok ---");
    for d in records.districts_of(Some(10), Locale::En) {
        println!("{} ({})", d.label(Locale::En), d.code);
        for s in records.subdistricts_of(Some(d.code), Locale::En) {
            println!("  - {} {}", s.label(Locale::En), s.postal_code);
        }
    }
    println!();

    // Example 3: Every area behind a postal code
    println!("--- Example 3: Areas served by 11000 ---");
    for r in records.records_matching_postal("11000") {
        println!(
            "{}, {}, {}",
            r.subdistrict_name.en, r.district_name.en, r.province_name.en
        );
    }
    println!();

    // Example 4: Suggestions while typing
    println!("--- Example 4: Suggestions for \"10\" ---");
    for s in records.postal_code_suggestions("10", 5) {
        println!("{}  {}, {}", s.postal_code, s.district_name.th, s.province_name.th);
    }
    println!();

    // Example 5: Statistics
    println!("--- Example 5: Statistics ---");
    let stats = table.stats();
    println!("Provinces: {}", stats.provinces);
    println!("Districts: {}", stats.districts);
    println!("Subdistricts: {}", stats.subdistricts);
    println!("Postal codes: {}", stats.postal_codes);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
