//! Cascade walkthrough for thaiaddr-rs
//!
//! Drives one address form the way a UI would and prints every event the
//! engine reports:
//! - typing a postal code digit by digit
//! - a code shared by two districts, resolved by a manual pick
//! - switching locale mid-session
//! - snapshot, validation and the one-line display

use anyhow::Result;
use std::sync::Arc;
use thaiaddr_core::prelude::*;

fn show(step: &str, events: &[EngineEvent]) {
    println!("> {step}");
    for e in events {
        println!("    {e:?}");
    }
}

fn main() -> Result<()> {
    println!("=== thaiaddr-rs Cascade Walkthrough ===\n");

    let table = ReferenceTable::load_shared(ReferenceTable::default_data_path())?;
    let mut form = Engine::new(Arc::clone(&table), EngineConfig::default());

    println!("--- Typing 10500 ---");
    for text in ["1", "10", "105", "1050", "10500"] {
        show(&format!("postal field = {text:?}"), &form.edit_postal_text(text));
    }
    println!("mode: {:?}\n", form.mode());

    println!("--- Picking Bang Rak / Si Lom ---");
    show("district 1004", &form.select_district(Some(1004), true));
    show("subdistrict 100402", &form.select_subdistrict(Some(100402), true));
    println!("mode: {:?}\n", form.mode());

    println!("--- Free text and locale ---");
    form.set_address_line(AddressField::HouseNo, "99/1");
    form.set_address_line(AddressField::StreetName, "Silom Rd");
    println!("th: {}", form.snapshot().format_display());
    show("locale en", &form.set_locale(Locale::En));
    println!("en: {}\n", form.snapshot().format_display());

    println!("--- Validation ---");
    let issues = form.validate();
    if issues.is_empty() {
        println!("✓ ready to submit");
    }
    show("reset", &form.reset());
    for issue in form.validate() {
        println!("  ✗ {issue}");
    }

    println!("\n=== Walkthrough completed successfully ===");
    Ok(())
}
