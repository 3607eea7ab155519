use ahash::HashSet;
use assert_matches::assert_matches;
use battler_random_teams::{
    Format,
    RandomTeamGenerator,
    SetCatalog,
    error::{
        InsufficientPoolError,
        UnsupportedFormatError,
    },
};
use battler_test_utils::{
    assert_error_message_contains,
    setup_test_environment,
    static_local_data_store,
    test_sets_dir,
};
use pretty_assertions::assert_eq;

fn hackmons(rules: &str, custom_rules: &str) -> Format {
    Format::new(
        serde_json::from_str(&format!(
            r#"{{
                "name": "Hackmons Cup",
                "team_generator": "Hackmons",
                "rules": {rules},
                "custom_rules": {custom_rules}
            }}"#
        ))
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn draws_items_abilities_and_moves_without_replacement() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..10 {
        let team = RandomTeamGenerator::new(
            hackmons("[]", "[]"),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .get_team()
        .unwrap();
        assert_eq!(team.members.len(), 6, "seed {seed}");

        let items = team
            .members
            .iter()
            .filter_map(|mon| mon.item.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(items.len(), 6, "seed {seed}");
        assert_eq!(items.iter().collect::<HashSet<_>>().len(), 6, "seed {seed}");

        let abilities = team
            .members
            .iter()
            .map(|mon| mon.ability.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(abilities.len(), 6, "seed {seed}");

        let moves = team
            .members
            .iter()
            .flat_map(|mon| mon.moves.iter())
            .collect::<Vec<_>>();
        assert_eq!(moves.len(), 24, "seed {seed}");
        assert_eq!(moves.iter().collect::<HashSet<_>>().len(), 24, "seed {seed}");
    }
}

#[test]
fn excludes_nonstandard_and_banned_resources() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..10 {
        let team = RandomTeamGenerator::new(
            hackmons("[]", r#"["-Leftovers", "-Earthquake"]"#),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .get_team()
        .unwrap();
        for mon in &team.members {
            assert_ne!(mon.item.as_deref(), Some("Leftovers"));
            assert_ne!(mon.item.as_deref(), Some("Soul Dew"));
            assert!(!mon.moves.contains(&"earthquake".to_owned()));
            assert!(!mon.moves.contains(&"hiddenpower".to_owned()));
            assert!(!mon.moves.contains(&"gmaxwildfire".to_owned()));
            assert_ne!(mon.ability, "Cacophony");
        }
    }
}

#[test]
fn custom_bans_require_large_enough_pools() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let result = RandomTeamGenerator::new(
        hackmons(r#"["Max Move Count = 24"]"#, r#"["-Leftovers"]"#),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .get_team();
    assert_matches!(&result, Err(error) => {
        assert!(error.is::<InsufficientPoolError>());
    });
    assert_error_message_contains(
        result,
        "Legal move count is insufficient to support Max Team Size * Max Move Count",
    );
}

#[test]
fn complex_bans_are_rejected() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let result = RandomTeamGenerator::new(
        hackmons("[]", r#"["-Garchomp + Swords Dance"]"#),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .get_team();
    assert_matches!(result, Err(error) => {
        assert!(error.is::<UnsupportedFormatError>());
        assert_eq!(
            error.to_string(),
            "Complex bans are not currently supported in Hackmons Cup."
        );
    });
}

#[test]
fn item_pool_must_cover_team_only_when_no_item_is_banned() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let result = RandomTeamGenerator::new(
        hackmons(r#"["Max Team Size = 30"]"#, r#"["-No Item"]"#),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .get_team();
    assert_error_message_contains(
        result,
        "Legal item count is insufficient to support Max Team Size",
    );

    // Without the ban, Mons may go without items and only the move pool is too small.
    let result = RandomTeamGenerator::new(
        hackmons(r#"["Max Team Size = 30"]"#, r#"["-Leftovers"]"#),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .get_team();
    assert_error_message_contains(
        result,
        "Legal move count is insufficient to support Max Team Size * Max Move Count",
    );
}

#[test]
fn ability_pool_must_cover_team_only_when_no_ability_is_banned() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let result = RandomTeamGenerator::new(
        hackmons(r#"["Max Team Size = 60"]"#, r#"["-No Ability"]"#),
        static_local_data_store(),
        &sets,
        Some(0),
    )
    .unwrap()
    .get_team();
    assert_error_message_contains(
        result,
        "Legal ability count is insufficient to support Max Team Size",
    );
}
