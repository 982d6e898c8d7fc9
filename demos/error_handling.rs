//! Error handling example for thaiaddr-rs
//!
//! This example demonstrates load failures and how the engine reports bad
//! input instead of failing.

use anyhow::Result;
use std::sync::Arc;
use thaiaddr_core::prelude::*;
use thaiaddr_core::PostalCodeError;

fn main() -> Result<()> {
    println!("=== thaiaddr-rs Error Handling Example ===\n");

    // Example 1: Load failures
    println!("--- Example 1: Loading broken sources ---");
    let sources = [
        ("missing file", ReferenceTable::load_from_path("does/not/exist.json")),
        ("empty table", ReferenceTable::from_json_str("[]")),
        ("not JSON", ReferenceTable::from_json_str("<html>")),
    ];
    for (label, result) in sources {
        match result {
            Ok(t) => println!("  {label}: unexpectedly loaded {} records", t.len()),
            Err(AddressError::NotFound(msg)) => println!("  {label}: not found ({msg})"),
            Err(e) => println!("  {label}: {e}"),
        }
    }
    println!();

    // Example 2: Postal code validation
    println!("--- Example 2: Postal code parsing ---");
    for text in ["10500", "1050", "10a00", "01234"] {
        match PostalCode::parse(text) {
            Ok(code) => println!("  {text}: ok ({code})"),
            Err(PostalCodeError::LeadingZero) => println!("  {text}: Thai codes never start with 0"),
            Err(e) => println!("  {text}: {e}"),
        }
    }
    println!();

    // Example 3: The engine reports, it does not fail
    println!("--- Example 3: Engine feedback ---");
    let table = Arc::new(ReferenceTable::load_from_path(
        ReferenceTable::default_data_path(),
    )?);
    let mut form = Engine::with_defaults(table);
    for e in form.edit_postal_text("99999") {
        println!("  99999 -> {e:?}");
    }
    for e in form.select_district(Some(1004), true) {
        println!("  district before any postal code -> {e:?}");
    }
    form.edit_postal_text("10500");
    for e in form.select_district(Some(5007), true) {
        println!("  district outside the list -> {e:?}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
