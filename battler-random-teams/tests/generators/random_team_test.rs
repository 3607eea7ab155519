use ahash::{
    HashMap,
    HashSet,
};
use anyhow::Result;
use assert_matches::assert_matches;
use battler_data::{
    DataStore,
    DataStoreByName,
    Type,
};
use battler_random_teams::{
    Format,
    FormatData,
    RandomTeamGenerator,
    SetCatalog,
    TeamData,
    config::Rule,
    error::UnsupportedFormatError,
};
use battler_test_utils::{
    setup_test_environment,
    static_local_data_store,
    test_sets_dir,
};
use pretty_assertions::assert_eq;

fn random_battle(rules: &[&str], custom_rules: &[&str]) -> Format {
    Format::new(FormatData {
        name: "Random Battle".to_owned(),
        generation: 9,
        game_type: Default::default(),
        team_generator: Default::default(),
        rules: rules.iter().map(|rule| rule.parse::<Rule>().unwrap()).collect(),
        custom_rules: custom_rules.iter().map(|rule| rule.to_string()).collect(),
        composition: Default::default(),
    })
    .unwrap()
}

fn generate(format: Format, sets: &SetCatalog, seed: u64) -> Result<TeamData> {
    RandomTeamGenerator::new(format, static_local_data_store(), sets, Some(seed))?.get_team()
}

#[test]
fn same_seed_generates_same_team() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in [0, 1, 12345] {
        let first = generate(random_battle(&[], &[]), &sets, seed).unwrap();
        let second = generate(random_battle(&[], &[]), &sets, seed).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn fills_team_with_distinct_species() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..10 {
        let team = generate(random_battle(&[], &[]), &sets, seed).unwrap();
        assert_eq!(team.members.len(), 6, "seed {seed}");
        let species = team
            .members
            .iter()
            .map(|mon| mon.species.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(species.len(), 6, "seed {seed}");
    }
}

#[test]
fn members_have_unique_moves_and_complete_sets() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..10 {
        let team = generate(random_battle(&[], &[]), &sets, seed).unwrap();
        for mon in &team.members {
            assert!(!mon.moves.is_empty() && mon.moves.len() <= 4, "{mon:?}");
            let moves = mon.moves.iter().collect::<HashSet<_>>();
            assert_eq!(moves.len(), mon.moves.len(), "{mon:?}");
            assert!(!mon.ability.is_empty(), "{mon:?}");
            assert!(mon.role.is_some(), "{mon:?}");
            assert!(mon.tera_type.is_some(), "{mon:?}");
            assert!(mon.level > 0 && mon.level <= 100, "{mon:?}");
        }
    }
}

#[test]
fn respects_max_team_size() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let team = generate(random_battle(&["Max Team Size = 3"], &[]), &sets, 5).unwrap();
    assert_eq!(team.members.len(), 3);
}

#[test]
fn adjust_level_overrides_set_levels() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let team = generate(random_battle(&["Adjust Level = 50"], &[]), &sets, 8).unwrap();
    assert!(team.members.iter().all(|mon| mon.level == 50));
}

#[test]
fn forced_monotype_only_uses_that_type() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let data = static_local_data_store();
    let format = random_battle(&["Force Monotype = Fire", "Max Team Size = 3"], &[]);
    let team = generate(format, &sets, 3).unwrap();
    assert_eq!(team.members.len(), 3);
    for mon in &team.members {
        let species = data.get_species_by_name(&mon.species).unwrap().unwrap();
        assert!(species.has_type(Type::Fire), "{}", mon.species);
    }
}

#[test]
fn custom_bans_are_rejected() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    assert_matches!(
        generate(random_battle(&[], &["-Leftovers"]), &sets, 0),
        Err(error) => {
            assert!(error.is::<UnsupportedFormatError>());
            assert_eq!(
                error.to_string(),
                "Custom bans are not currently supported in Random Battle."
            );
        }
    );
}

#[test]
fn pokemon_of_the_day_takes_second_slot() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..5 {
        let mut generator = RandomTeamGenerator::new(
            random_battle(&["potd"], &[]),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .with_pokemon_of_the_day("Blissey")
        .unwrap();
        let team = generator.get_team().unwrap();
        assert_eq!(team.members[1].species, "Blissey", "seed {seed}");
    }
}

#[test]
fn pokemon_of_the_day_requires_rule() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let mut generator = RandomTeamGenerator::new(
        random_battle(&["Max Team Size = 1"], &[]),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .with_pokemon_of_the_day("Blissey")
    .unwrap();
    let without_potd = generator.get_team().unwrap();

    let mut generator = RandomTeamGenerator::new(
        random_battle(&["Max Team Size = 1", "potd"], &[]),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .with_pokemon_of_the_day("Blissey")
    .unwrap();
    let with_potd = generator.get_team().unwrap();
    assert_eq!(with_potd.members[0].species, "Blissey");
    assert_eq!(without_potd.members.len(), 1);
}

#[test]
fn consecutive_teams_differ_but_replay_from_seed() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let mut generator = RandomTeamGenerator::new(
        random_battle(&[], &[]),
        static_local_data_store(),
        &sets,
        Some(99),
    )
    .unwrap();
    let first = generator.get_team().unwrap();
    let _ = generator.get_team().unwrap();
    generator.set_seed(99);
    assert_eq!(generator.get_team().unwrap(), first);
}

#[test]
fn tracked_members_respect_composition_limits() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let data = static_local_data_store();
    let type_chart = data.get_type_chart().unwrap();
    for seed in 0..40 {
        let team = generate(random_battle(&[], &[]), &sets, seed).unwrap();
        let mut types = HashMap::<Type, usize>::default();
        let mut weaknesses = HashMap::<Type, usize>::default();
        let mut type_combos = HashMap::<String, usize>::default();
        // The last member is never counted against the limits.
        for mon in &team.members[..team.members.len() - 1] {
            let species = data.get_species_by_name(&mon.species).unwrap().unwrap();
            let species_types = species.types();
            for typ in &species_types {
                *types.entry(*typ).or_default() += 1;
            }
            for attacking in Type::ALL {
                if type_chart.effectiveness(attacking, &species_types) > 0 {
                    *weaknesses.entry(attacking).or_default() += 1;
                }
            }
            *type_combos.entry(species.type_combination()).or_default() += 1;
        }
        assert!(types.values().all(|count| *count <= 2), "seed {seed}: {types:?}");
        assert!(
            weaknesses.values().all(|count| *count <= 3),
            "seed {seed}: {weaknesses:?}"
        );
        assert!(
            type_combos.values().all(|count| *count <= 1),
            "seed {seed}: {type_combos:?}"
        );
    }
}
