use ahash::HashSet;
use battler_data::{
    DataStoreByName,
    Id,
    Type,
};
use battler_random_teams::{
    Format,
    RandomTeamGenerator,
    SetCatalog,
};
use battler_test_utils::{
    setup_test_environment,
    static_local_data_store,
    test_sets_dir,
};
use pretty_assertions::assert_eq;

fn challenge_cup(generation: u8, rules: &str) -> Format {
    Format::new(
        serde_json::from_str(&format!(
            r#"{{
                "name": "Challenge Cup",
                "generation": {generation},
                "team_generator": "Challenge Cup",
                "rules": {rules}
            }}"#
        ))
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn generates_legal_random_members() {
    setup_test_environment();
    let sets = SetCatalog::default();
    let data = static_local_data_store();
    for seed in 0..10 {
        let team = RandomTeamGenerator::new(challenge_cup(9, "[]"), data, &sets, Some(seed))
            .unwrap()
            .get_team()
            .unwrap();
        assert_eq!(team.members.len(), 6, "seed {seed}");

        let mut dex_numbers = HashSet::default();
        for mon in &team.members {
            let species = data.get_species_by_name(&mon.species).unwrap().unwrap();
            assert!(species.nonstandard.is_none(), "{}", mon.species);
            assert!(dex_numbers.insert(species.num), "seed {seed}: {}", mon.species);

            assert!(!mon.moves.is_empty() && mon.moves.len() <= 4, "{mon:?}");
            let moves = mon.moves.iter().collect::<HashSet<_>>();
            assert_eq!(moves.len(), mon.moves.len());
            for move_id in &mon.moves {
                assert!(
                    species
                        .learnset
                        .iter()
                        .any(|learned| Id::from(learned.as_str()) == move_id.as_str()),
                    "{} cannot learn {move_id}",
                    mon.species
                );
            }

            assert!(mon.evs.sum() <= 510, "{mon:?}");
            assert!(mon.ivs.values().all(|iv| iv <= 31), "{mon:?}");
            assert!(mon.level >= 1 && mon.level <= 100, "{mon:?}");
            assert!(mon.nature.is_some());
            assert!(mon.tera_type.is_some());
        }
    }
}

#[test]
fn older_generations_have_no_tera_type() {
    setup_test_environment();
    let sets = SetCatalog::default();
    let team = RandomTeamGenerator::new(
        challenge_cup(8, "[]"),
        static_local_data_store(),
        &sets,
        Some(3),
    )
    .unwrap()
    .get_team()
    .unwrap();
    assert_eq!(team.members.len(), 6);
    assert!(team.members.iter().all(|mon| mon.tera_type.is_none()));
}

#[test]
fn forced_monotype_filters_species() {
    setup_test_environment();
    let sets = SetCatalog::default();
    let data = static_local_data_store();
    let team = RandomTeamGenerator::new(
        challenge_cup(9, r#"["Force Monotype = Steel", "Max Team Size = 3"]"#),
        data,
        &sets,
        Some(11),
    )
    .unwrap()
    .get_team()
    .unwrap();
    assert_eq!(team.members.len(), 3);
    for mon in &team.members {
        let species = data.get_species_by_name(&mon.species).unwrap().unwrap();
        assert!(species.has_type(Type::Steel), "{}", mon.species);
    }
}

#[test]
fn adjust_level_overrides_balanced_level() {
    setup_test_environment();
    let sets = SetCatalog::default();
    let team = RandomTeamGenerator::new(
        challenge_cup(9, r#"["Adjust Level = 100"]"#),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .get_team()
    .unwrap();
    assert!(team.members.iter().all(|mon| mon.level == 100));
}

#[test]
fn too_few_species_fails() {
    setup_test_environment();
    let sets = SetCatalog::default();
    let result = RandomTeamGenerator::new(
        challenge_cup(9, r#"["Max Team Size = 50"]"#),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .get_team();
    assert!(result.is_err());
}
