use ahash::HashSet;
use battler_data::{
    Nature,
    StatTable,
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

fn preset(rules: &str) -> Format {
    Format::new(
        serde_json::from_str(&format!(
            r#"{{
                "name": "Preset Battle",
                "team_generator": "Preset",
                "rules": {rules}
            }}"#
        ))
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn builds_team_of_distinct_preset_species() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..5 {
        let team = RandomTeamGenerator::new(
            preset("[]"),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .get_team()
        .unwrap();
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
fn skips_unknown_species_and_fills_defaults() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let team = RandomTeamGenerator::new(
        preset(r#"["Max Team Size = 12"]"#),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .get_team()
    .unwrap();
    // One catalog entry names a species that does not exist.
    assert_eq!(team.members.len(), 9);
    assert!(team.members.iter().all(|mon| mon.species != "Missing Glitch"));

    for mon in &team.members {
        match mon.species.as_str() {
            "Volcarona" => assert!(mon.shiny),
            "Skeledirge" => assert_eq!(mon.nature, Some(Nature::Serious)),
            "Blissey" => {
                assert_eq!(mon.happiness, Some(160));
                assert_eq!(
                    mon.evs,
                    StatTable {
                        hp: 252,
                        def: 252,
                        spd: 4,
                        ..Default::default()
                    }
                );
                assert_eq!(mon.ivs, StatTable::uniform(31));
            }
            "Garchomp" => {
                assert_eq!(mon.moves.len(), 4);
                assert!(mon.level == 100 || mon.level == 80);
            }
            _ => assert_eq!(mon.level, 100),
        }
    }
}

#[test]
fn forced_monotype_filters_presets() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let team = RandomTeamGenerator::new(
        preset(r#"["Force Monotype = Fire"]"#),
        static_local_data_store(),
        &sets,
        Some(1),
    )
    .unwrap()
    .get_team()
    .unwrap();
    let mut species = team
        .members
        .iter()
        .map(|mon| mon.species.as_str())
        .collect::<Vec<_>>();
    species.sort();
    assert_eq!(species, vec!["Heatran", "Skeledirge", "Volcarona"]);
}
