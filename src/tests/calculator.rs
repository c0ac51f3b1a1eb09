use proptest::prelude::*;

use super::fixtures::{nature, pokemon};
use crate::{
    calculator::{CalculatorState, calculate_stats},
    pokemon::stats::{Stat, StatSpread, base_stat_percent},
};

fn perfect() -> (StatSpread, StatSpread, StatSpread) {
    (
        StatSpread::splat(100),
        StatSpread::splat(31),
        StatSpread::splat(252),
    )
}

#[test]
fn test_boosting_nature_at_level_100() {
    let (base, ivs, evs) = perfect();
    let adamant = nature("Adamant", "Attack", "Sp. Atk");

    let stats = calculate_stats(&base, 100, Some(&adamant), &ivs, &evs);

    assert_eq!(stats.attack, 328);
    assert_eq!(stats.special_attack, 269);
    assert_eq!(stats.defense, 299);
    assert_eq!(stats.hp, 404);
}

#[test]
fn test_neutral_and_missing_nature_agree() {
    let (base, ivs, evs) = perfect();
    let hardy = nature("Hardy", "Attack", "Attack");

    let with_hardy = calculate_stats(&base, 100, Some(&hardy), &ivs, &evs);
    let without = calculate_stats(&base, 100, None, &ivs, &evs);

    assert_eq!(with_hardy, without);
    assert_eq!(without.attack, 299);
}

#[test]
fn test_inputs_are_clamped() {
    let (base, ivs, evs) = perfect();

    let level_zero = calculate_stats(&base, 0, None, &ivs, &evs);
    let level_one = calculate_stats(&base, 1, None, &ivs, &evs);
    assert_eq!(level_zero, level_one);

    let level_high = calculate_stats(&base, 250, None, &ivs, &evs);
    let level_max = calculate_stats(&base, 100, None, &ivs, &evs);
    assert_eq!(level_high, level_max);

    let wild = calculate_stats(
        &base,
        100,
        None,
        &StatSpread::splat(99),
        &StatSpread::splat(1000),
    );
    assert_eq!(wild, level_max);
}

#[test]
fn test_default_state() {
    let state = CalculatorState::default();

    assert_eq!(state.level, 50);
    assert_eq!(state.nature, "Adamant");
    assert_eq!(state.ivs, StatSpread::splat(31));
    assert_eq!(state.evs.attack, 252);
    assert_eq!(state.evs.special_defense, 4);
    assert_eq!(state.evs.speed, 252);
    assert_eq!(state.evs.total(), 508);
}

#[test]
fn test_state_calculates_charizard() {
    let charizard = pokemon(6, "0006", "Charizard", ("Fire", Some("Flying")), "1");
    let natures = vec![
        nature("Adamant", "Attack", "Sp. Atk"),
        nature("Modest", "Sp. Atk", "Attack"),
    ];

    let stats = CalculatorState::default().calculate(&charizard, &natures);

    assert_eq!(
        stats,
        StatSpread {
            hp: 153,
            attack: 149,
            defense: 98,
            special_attack: 116,
            special_defense: 106,
            speed: 152,
        }
    );
}

#[test]
fn test_state_nature_name_ignores_case() {
    let charizard = pokemon(6, "0006", "Charizard", ("Fire", Some("Flying")), "1");
    let state = CalculatorState {
        nature: " aDaMaNt ".to_string(),
        ..CalculatorState::default()
    };

    let stats = state.calculate(&charizard, &[nature("Adamant", "Attack", "Sp. Atk")]);
    assert_eq!(stats.attack, 149);
}

#[test]
fn test_state_with_unknown_nature_is_neutral() {
    let charizard = pokemon(6, "0006", "Charizard", ("Fire", Some("Flying")), "1");
    let state = CalculatorState {
        nature: "Grumpy".to_string(),
        ..CalculatorState::default()
    };

    let stats = state.calculate(&charizard, &[nature("Adamant", "Attack", "Sp. Atk")]);
    assert_eq!(stats.attack, 136);
    assert_eq!(stats.special_attack, 129);
}

#[test]
fn test_ev_total_is_capped() {
    let mut state = CalculatorState::default();

    // 508 already spent, 2 left
    assert!(!state.set_ev(Stat::Hp, 4));
    assert_eq!(state.evs.hp, 0);
    assert!(state.set_ev(Stat::Hp, 2));
    assert_eq!(state.evs.total(), 510);

    // Lowering is always allowed
    assert!(state.set_ev(Stat::Attack, 0));
    // Single values are clamped before the total check
    assert!(state.set_ev(Stat::Defense, 300));
    assert_eq!(state.evs.defense, 252);
}

#[test]
fn test_huge_evs_do_not_overflow() {
    let mut state: CalculatorState = serde_json::from_str(
        r#"{
            "level": 50,
            "nature": "Adamant",
            "ivs": {"hp": 31, "attack": 31, "defense": 31, "specialAttack": 31, "specialDefense": 31, "speed": 31},
            "evs": {"hp": 4294967295, "attack": 10, "defense": 0, "specialAttack": 0, "specialDefense": 0, "speed": 0}
        }"#,
    )
    .unwrap();

    assert_eq!(state.evs.total(), u32::MAX);
    assert!(!state.set_ev(Stat::Speed, 4));
    assert_eq!(state.evs.speed, 0);

    // Replacing the oversized value itself is still allowed
    assert!(state.set_ev(Stat::Hp, 0));
    assert_eq!(state.evs.total(), 10);
}

#[test]
fn test_huge_base_stats_saturate() {
    let base = StatSpread::splat(u32::MAX);
    let adamant = nature("Adamant", "Attack", "Sp. Atk");

    let stats = calculate_stats(
        &base,
        100,
        Some(&adamant),
        &StatSpread::default(),
        &StatSpread::default(),
    );

    // (u32::MAX / 100) once the doubling saturates
    assert_eq!(stats.hp, 42_949_672 + 110);
    assert_eq!(stats.defense, 42_949_677);
    assert_eq!(stats.attack, 47_244_644);
    assert_eq!(stats.special_attack, 38_654_709);
}

#[test]
fn test_setters_clamp() {
    let mut state = CalculatorState::default();

    state.set_iv(Stat::Speed, 40);
    assert_eq!(state.ivs.speed, 31);

    state.set_level(0);
    assert_eq!(state.level, 1);
    state.set_level(101);
    assert_eq!(state.level, 100);
}

#[test]
fn test_base_stat_percent() {
    assert_eq!(base_stat_percent(0), 0);
    assert_eq!(base_stat_percent(100), 39);
    assert_eq!(base_stat_percent(255), 100);
    assert_eq!(base_stat_percent(300), 100);
}

fn arb_spread(max: u32) -> impl Strategy<Value = StatSpread> {
    prop::array::uniform6(0..=max).prop_map(|[hp, attack, defense, special_attack, special_defense, speed]| {
        StatSpread {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    })
}

proptest! {
    #[test]
    fn prop_calculation_is_deterministic(
        base in arb_spread(255),
        ivs in arb_spread(31),
        evs in arb_spread(252),
        level in 1u32..=100,
    ) {
        let adamant = nature("Adamant", "Attack", "Sp. Atk");
        let first = calculate_stats(&base, level, Some(&adamant), &ivs, &evs);
        let second = calculate_stats(&base, level, Some(&adamant), &ivs, &evs);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_hp_never_drops_with_level(
        base in arb_spread(255),
        ivs in arb_spread(31),
        evs in arb_spread(252),
        level in 1u32..100,
    ) {
        let lower = calculate_stats(&base, level, None, &ivs, &evs);
        let higher = calculate_stats(&base, level + 1, None, &ivs, &evs);
        prop_assert!(higher.hp >= lower.hp);
    }

    #[test]
    fn prop_evs_below_four_do_nothing(
        base in arb_spread(255),
        ivs in arb_spread(31),
        level in 1u32..=100,
        ev in 0u32..4,
    ) {
        let none = calculate_stats(&base, level, None, &ivs, &StatSpread::default());
        let some = calculate_stats(&base, level, None, &ivs, &StatSpread::splat(ev));
        prop_assert_eq!(none, some);
    }
}
