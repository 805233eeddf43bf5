//! Character Builder Example
//!
//! Walks through a full point-buy session:
//! - Raising attributes against the pool ceiling
//! - Watching class eligibility change as scores move
//! - Spending the Intelligence-derived skill point budget
//! - Saving and restoring the sheet through a store

use charsheet::store::{CharacterStore, MemoryStore};
use charsheet::{class, format_modifier, Attribute, CharacterSheet, CLASS_LIST};

fn print_sheet(sheet: &CharacterSheet) {
    println!("Attributes (total {}):", sheet.attributes().total());
    for (attribute, score) in sheet.attributes().iter() {
        println!(
            "  {attribute}: {score} (modifier {})",
            format_modifier(sheet.attribute_modifier(attribute))
        );
    }
    println!(
        "Skill points: {} / {}",
        sheet.spent_skill_points(),
        sheet.max_skill_points()
    );
}

fn main() {
    let mut sheet = CharacterSheet::new();
    println!("=== Fresh sheet ===");
    print_sheet(&sheet);

    // Build toward a Wizard.
    println!("\n=== Raising Intelligence to 14 ===");
    for _ in 0..4 {
        sheet.increase_attribute(Attribute::Intelligence).unwrap();
    }
    for class in CLASS_LIST {
        let eligible = sheet.is_eligible(class.name).unwrap();
        println!("  {}: {}", class.name, if eligible { "eligible" } else { "not eligible" });
    }
    sheet.toggle_class("Wizard").unwrap();
    println!("Selected: {:?}", sheet.selected_class());

    // Spend the enlarged budget.
    println!("\n=== Spending skill points ===");
    sheet.spend_skill("Arcana", 4).unwrap();
    sheet.spend_skill("Investigation", 3).unwrap();
    print_sheet(&sheet);

    // An over-ceiling increase is rejected, sheet untouched.
    println!("\n=== Pushing against the pool ceiling ===");
    for attribute in Attribute::ALL {
        while sheet.increase_attribute(attribute).is_ok() {}
    }
    match sheet.increase_attribute(Attribute::Strength) {
        Err(err) => println!("rejected: {err}"),
        Ok(()) => unreachable!(),
    }
    print_sheet(&sheet);

    // Round-trip through the persistence seam.
    println!("\n=== Save / load ===");
    let mut store = MemoryStore::new();
    store.save(&sheet.snapshot()).unwrap();

    let mut restored = CharacterSheet::new();
    if let Some(doc) = store.load().unwrap() {
        restored.apply(doc);
    }
    assert_eq!(restored, sheet);
    println!("restored sheet matches saved sheet");
    println!(
        "eligible classes after the spree: {:?}",
        class::eligible_classes(restored.attributes())
    );
}
