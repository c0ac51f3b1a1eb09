use super::fixtures::pokemon;
use crate::{
    pokemon::{Pokemon, ptype::PokemonType},
    team::{MAX_TEAM_SIZE, Team, TeamError, analysis::analyze_team},
};

use PokemonType::*;

fn charizard(id: u32) -> Pokemon {
    pokemon(id, "0006", "Charizard", ("Fire", Some("Flying")), "1")
}

fn gengar() -> Pokemon {
    pokemon(94, "0094", "Gengar", ("Ghost", Some("Poison")), "1")
}

#[test]
fn test_add_assigns_slots() {
    let mut team = Team::new();

    assert_eq!(team.add(charizard(6)), Ok(1));
    assert_eq!(team.add(gengar()), Ok(2));
    assert_eq!(team.len(), 2);
    assert_eq!(team.members()[1].pokemon.name, "Gengar");
}

#[test]
fn test_add_rejects_duplicates_and_seventh_member() {
    let mut team = Team::new();
    team.add(charizard(6)).unwrap();

    assert_eq!(
        team.add(charizard(6)),
        Err(TeamError::Duplicate("Charizard".to_string()))
    );

    for id in 100..100 + MAX_TEAM_SIZE as u32 - 1 {
        team.add(charizard(id)).unwrap();
    }
    assert!(team.is_full());
    assert_eq!(team.add(gengar()), Err(TeamError::Full));
    assert_eq!(team.len(), MAX_TEAM_SIZE);
}

#[test]
fn test_remove_renumbers_slots() {
    let mut team = Team::new();
    for id in 1..=4 {
        team.add(charizard(id)).unwrap();
    }

    let removed = team.remove(2).unwrap();
    assert_eq!(removed.id, 2);

    let slots: Vec<(u32, u8)> = team
        .members()
        .iter()
        .map(|m| (m.pokemon.id, m.slot))
        .collect();
    assert_eq!(slots, [(1, 1), (3, 2), (4, 3)]);

    assert!(team.remove(9).is_none());
    team.clear();
    assert!(team.is_empty());
}

#[test]
fn test_team_serializes_as_list() {
    let mut team = Team::new();
    team.add(gengar()).unwrap();

    let json = serde_json::to_value(&team).unwrap();
    assert_eq!(json[0]["slot"], 1);
    assert_eq!(json[0]["pokemon"]["name"], "Gengar");

    let back: Team = serde_json::from_value(json).unwrap();
    assert_eq!(back, team);
}

#[test]
fn test_dual_type_cancellation() {
    let analysis = analyze_team([&charizard(6)]);

    // Flying's immunity cancels Fire's ground weakness
    assert_eq!(analysis.weakness_count(Ground), 0);
    // Fire's ice resistance is cancelled by Flying's weakness, and vice versa
    assert_eq!(analysis.weakness_count(Ice), 0);
    assert_eq!(analysis.resistance_count(Ice), 0);

    assert_eq!(analysis.weakness_count(Water), 1);
    assert_eq!(analysis.weakness_count(Electric), 1);
    // Both types are weak to rock
    assert_eq!(analysis.weakness_count(Rock), 2);

    assert_eq!(analysis.resistance_count(Grass), 2);
    assert_eq!(analysis.resistance_count(Bug), 2);
    assert_eq!(analysis.resistance_count(Fire), 1);
    assert_eq!(analysis.resistance_count(Fighting), 1);

    assert_eq!(analysis.immunities, [Ground]);
}

#[test]
fn test_immunities_are_pooled_once() {
    let first = charizard(6);
    let second = charizard(7);
    let ghost = gengar();

    let analysis = analyze_team([&first, &ghost, &second]);

    assert_eq!(analysis.immunities, [Ground, Normal, Fighting]);
    assert!(analysis.is_immune_to(Normal));
    assert!(!analysis.is_immune_to(Dragon));
    assert_eq!(analysis.weakness_count(Water), 2);
    assert_eq!(analysis.weakness_count(Ghost), 1);
    assert_eq!(analysis.weakness_count(Psychic), 1);
}

#[test]
fn test_type_histogram() {
    let mut team = Team::new();
    team.add(charizard(6)).unwrap();
    team.add(pokemon(4, "0004", "Charmander", ("Fire", None), "1")).unwrap();

    let analysis = team.analyze();
    assert_eq!(analysis.types.get("Fire"), Some(&2));
    assert_eq!(analysis.types.get("Flying"), Some(&1));
    assert_eq!(analysis.types.len(), 2);
}

#[test]
fn test_unknown_types_are_counted_but_not_analyzed() {
    let odd = pokemon(1, "0000", "Shadow Lugia", ("Shadow", None), "3");
    let analysis = analyze_team([&odd]);

    assert_eq!(analysis.types.get("Shadow"), Some(&1));
    assert!(analysis.weaknesses.is_empty());
    assert!(analysis.resistances.is_empty());
    assert!(analysis.immunities.is_empty());
}

#[test]
fn test_type_names_parse_ignoring_case() {
    assert_eq!(" fire ".parse::<PokemonType>(), Ok(Fire));
    assert_eq!("FAIRY".parse::<PokemonType>(), Ok(Fairy));
    assert!("Shadow".parse::<PokemonType>().is_err());
    assert_eq!(Steel.to_string(), "Steel");
}
