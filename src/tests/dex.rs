use std::fs;
use std::path::Path;

use super::fixtures::{bundled_data_dir, sample_dex};
use crate::{
    config::DexConfig,
    dex::{Dex, loader},
    pokemon::{form::FormKind, stats::Stat},
};

fn bundled_dex() -> Dex {
    let config = DexConfig::default().with_data_dir(bundled_data_dir());
    Dex::load(&config).expect("bundled dataset should load")
}

fn names<'a>(pokemon: impl IntoIterator<Item = &'a crate::pokemon::Pokemon>) -> Vec<&'a str> {
    pokemon.into_iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_bundled_dataset_loads() {
    let dex = bundled_dex();

    assert_eq!(dex.all_pokemon().len(), 18);
    assert_eq!(dex.variants().len(), 3);
    assert_eq!(dex.moves().len(), 10);
    assert_eq!(dex.natures().len(), 25);
}

#[test]
fn test_ids_continue_into_variants() {
    let dex = bundled_dex();

    let ids: Vec<u32> = dex.all_pokemon().iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=18).collect::<Vec<_>>());
    assert_eq!(dex.variants()[0].id, 16);
}

#[test]
fn test_variant_defaults() {
    let dex = bundled_dex();
    let vulpix = dex.pokemon_by_name("Alolan Vulpix").unwrap();

    assert!(vulpix.is_variant);
    assert_eq!(vulpix.variant_type.as_deref(), Some("Alolan"));
    assert_eq!(vulpix.gender, "50% male, 50% female");
    assert_eq!(vulpix.rarity.as_deref(), Some("Normal"));
    assert_eq!(vulpix.form, FormKind::Regional);
    // The variants roster abbreviates the special stats
    assert_eq!(vulpix.stats.special_attack, 50);
    assert_eq!(vulpix.stats.special_defense, 65);
}

#[test]
fn test_blank_cells_and_missing_total() {
    let dex = bundled_dex();

    let bulbasaur = dex.pokemon_by_name("bulbasaur").unwrap();
    assert_eq!(bulbasaur.ability_ii, None);
    assert_eq!(bulbasaur.secondary_type.as_deref(), Some("Poison"));

    let charmander = dex.pokemon_by_name("charmander").unwrap();
    assert_eq!(charmander.secondary_type, None);

    let mewtwo = dex.pokemon_by_name("Mewtwo").unwrap();
    assert_eq!(mewtwo.total, 680);
    assert_eq!(mewtwo.roles.special_sweeper, 154 + 130);
}

#[test]
fn test_forms_are_classified() {
    let dex = bundled_dex();
    let form = |name: &str| dex.pokemon_by_name(name).unwrap().form;

    assert_eq!(form("Meganium"), FormKind::Base);
    assert_eq!(form("Mega Venusaur"), FormKind::Mega);
    assert_eq!(form("Gigantamax Charizard"), FormKind::Gigantamax);
    assert_eq!(form("Hisuian Growlithe"), FormKind::Regional);
}

#[test]
fn test_moves_and_natures_from_bundled_data() {
    let dex = bundled_dex();

    let swords_dance = dex.move_by_name("swords dance").unwrap();
    assert_eq!(swords_dance.power, "—");
    assert_eq!(swords_dance.pp, "20");

    let ember = dex.move_by_name("Ember").unwrap();
    assert_eq!(ember.probability, "10");

    let adamant = dex.nature_by_name("adamant").unwrap();
    assert_eq!(adamant.increased_stat(), Some(Stat::Attack));
    assert_eq!(adamant.decreased_stat(), Some(Stat::SpecialAttack));
    assert!(dex.nature_by_name("Hardy").unwrap().is_neutral());
}

#[test]
fn test_lookups() {
    let dex = sample_dex();

    assert_eq!(dex.pokemon_by_number(" 0007 ").unwrap().name, "Squirtle");
    assert_eq!(dex.pokemon_by_number("0006").unwrap().name, "Charizard");
    assert!(dex.pokemon_by_number("0150").is_none());

    assert_eq!(dex.pokemon_by_name("CHARMANDER").unwrap().id, 2);
    assert_eq!(dex.pokemon_by_name("alolan vulpix").unwrap().id, 9);
    assert!(dex.pokemon_by_name("Missingno").is_none());

    assert_eq!(dex.move_by_name("ember").unwrap().move_type, "Fire");
    assert!(dex.move_by_name("Hyper Beam").is_none());
}

#[test]
fn test_related_forms() {
    let dex = bundled_dex();

    assert_eq!(
        names(dex.mega_evolutions_of("Charizard")),
        ["Mega Charizard X", "Mega Charizard Y"]
    );
    assert_eq!(
        names(dex.gigantamax_forms_of("Charizard")),
        ["Gigantamax Charizard"]
    );
    assert_eq!(names(dex.regional_variants_of("Vulpix")), ["Alolan Vulpix"]);
    assert!(dex.mega_evolutions_of("Meganium").is_empty());
}

#[test]
fn test_collection_filters() {
    let dex = bundled_dex();

    assert_eq!(names(dex.by_generation("2")), ["Meganium"]);
    assert_eq!(
        names(dex.by_type("Poison")),
        ["Bulbasaur", "Venusaur", "Mega Venusaur", "Gengar"]
    );
    assert_eq!(dex.by_egg_group("Field").len(), 6);
    assert_eq!(
        names(dex.with_ability("Unnerve")),
        ["Meowth", "Mewtwo", "Galarian Meowth"]
    );
}

fn write_dataset(dir: &Path, national: &str) {
    fs::write(dir.join("National Dex.json"), national).unwrap();
    fs::write(dir.join("Regional Variants.json"), "[]").unwrap();
    fs::write(dir.join("Moves.json"), "[]").unwrap();
    fs::write(
        dir.join("Natures.json"),
        r#"[{"Nature": "Bold", "Increases": "Defense", "Decreases": "Attack"}]"#,
    )
    .unwrap();
}

#[test]
fn test_loader_accepts_numbers_as_strings() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(
        dir.path(),
        r#"[{
            "Pokedex Number": 25,
            "Name": " Pikachu ",
            "Primary Type": "Electric",
            "Secondary Type": null,
            "HP": "35", "Attack": 55, "Defense": 40,
            "Special Attack": "50", "Special Defense": 50, "Speed": 90.0,
            "Generation": 1
        }]"#,
    );

    let config = DexConfig::default().with_data_dir(dir.path());
    let data = loader::load(&config).unwrap();
    let pikachu = &data.pokemon[0];

    assert_eq!(pikachu.pokedex_number, "25");
    assert_eq!(pikachu.name, "Pikachu");
    assert_eq!(pikachu.secondary_type, None);
    assert_eq!(pikachu.stats.hp, 35);
    assert_eq!(pikachu.stats.speed, 90);
    assert_eq!(pikachu.total, 320);
    assert_eq!(pikachu.generation, "1");
    assert_eq!(data.natures[0].nature, "Bold");
}

#[test]
fn test_loader_rejects_bad_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = DexConfig::default().with_data_dir(dir.path());

    // Nothing written yet
    let err = loader::load(&config).unwrap_err();
    assert!(err.to_string().contains("Failed to read dataset file"));

    write_dataset(dir.path(), "{ not json");
    let err = loader::load(&config).unwrap_err();
    assert!(err.to_string().contains("Malformed dataset file"));

    write_dataset(
        dir.path(),
        r#"[{"Pokedex Number": "0001", "Name": "Bulbasaur", "Primary Type": "Grass",
             "HP": "lots", "Attack": 49, "Defense": 49, "Special Attack": 65,
             "Special Defense": 65, "Speed": 45}]"#,
    );
    assert!(loader::load(&config).is_err());
}
