//! Skill Check Example
//!
//! Resolves a few skill checks with a real RNG, and shows how free-form
//! difficulty input is validated before it reaches the resolver.

use charsheet::check::RngRoller;
use charsheet::{parse_difficulty_class, Attribute, CharacterSheet};

fn main() {
    let mut sheet = CharacterSheet::new();
    sheet.adjust_attribute(Attribute::Dexterity, 4).unwrap();
    sheet.spend_skill("Stealth", 3).unwrap();

    let mut roller = RngRoller(rand::thread_rng());

    // Free-form DC input is parsed first; bad input never reaches the
    // resolver.
    for input in ["10", "15", "twelve"] {
        match parse_difficulty_class(input) {
            Ok(dc) => {
                let result = sheet.skill_check("Stealth", dc, &mut roller).unwrap();
                println!(
                    "Stealth vs DC {dc}: rolled {} + {} = {} -> {}",
                    result.die,
                    result.skill_total,
                    result.grand_total(),
                    if result.success { "Success" } else { "Fail" }
                );
            }
            Err(err) => println!("{input:?}: {err}"),
        }
    }
}
