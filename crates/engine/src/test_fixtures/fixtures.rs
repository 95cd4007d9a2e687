//! JSON payloads shaped like the reference API's responses.

use serde_json::{json, Value};

fn ability_ref(abbreviation: &str) -> Value {
    let index = abbreviation.to_lowercase();
    json!({
        "index": index,
        "name": abbreviation,
        "url": format!("/api/ability-scores/{}", index),
    })
}

pub fn race(name: &str, bonuses: &[(&str, i32)]) -> Value {
    let ability_bonuses: Vec<Value> = bonuses
        .iter()
        .map(|(ability, bonus)| json!({ "ability_score": ability_ref(ability), "bonus": bonus }))
        .collect();

    json!({
        "index": charforge_domain::slugify(name),
        "name": name,
        "speed": 30,
        "ability_bonuses": ability_bonuses,
        "size": "Medium",
    })
}

pub fn class(name: &str, hit_die: i32, saves: &[&str]) -> Value {
    let saving_throws: Vec<Value> = saves.iter().map(|s| ability_ref(s)).collect();

    json!({
        "index": charforge_domain::slugify(name),
        "name": name,
        "hit_die": hit_die,
        "saving_throws": saving_throws,
    })
}

pub fn armor(name: &str, base: i32, dex_bonus: bool) -> Value {
    json!({
        "index": charforge_domain::slugify(name),
        "name": name,
        "equipment_category": {"index": "armor", "name": "Armor", "url": "/api/equipment-categories/armor"},
        "armor_category": "Light",
        "armor_class": {"base": base, "dex_bonus": dex_bonus},
    })
}

pub fn weapon(name: &str, damage_dice: &str) -> Value {
    json!({
        "index": charforge_domain::slugify(name),
        "name": name,
        "weapon_category": "Simple",
        "damage": {
            "damage_dice": damage_dice,
            "damage_type": {"index": "bludgeoning", "name": "Bludgeoning", "url": "/api/damage-types/bludgeoning"},
        },
        "range": {"normal": 5},
    })
}

pub fn item(name: &str) -> Value {
    json!({
        "index": charforge_domain::slugify(name),
        "name": name,
        "gear_category": {"index": "standard-gear", "name": "Standard Gear", "url": "/api/equipment-categories/standard-gear"},
    })
}

pub fn spell(name: &str, level: i32) -> Value {
    json!({
        "index": charforge_domain::slugify(name),
        "name": name,
        "level": level,
        "school": {"index": "evocation", "name": "Evocation", "url": "/api/magic-schools/evocation"},
    })
}
