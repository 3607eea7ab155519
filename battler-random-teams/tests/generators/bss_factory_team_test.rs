use ahash::HashSet;
use battler_data::Id;
use battler_random_teams::{
    Format,
    RandomTeamGenerator,
    SetCatalog,
    SetRepository,
};
use battler_test_utils::{
    setup_test_environment,
    static_local_data_store,
    test_sets_dir,
};
use pretty_assertions::assert_eq;

fn bss_factory(rules: &str) -> Format {
    Format::new(
        serde_json::from_str(&format!(
            r#"{{
                "name": "BSS Factory",
                "team_generator": "BSS Factory",
                "rules": {rules}
            }}"#
        ))
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn builds_level_50_team_with_item_clause() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..10 {
        let team = RandomTeamGenerator::new(
            bss_factory("[]"),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .get_team()
        .unwrap();
        assert_eq!(team.members.len(), 6, "seed {seed}");
        assert!(team.members.iter().all(|mon| mon.level == 50));

        let species = team
            .members
            .iter()
            .map(|mon| Id::from(mon.species.as_str()))
            .collect::<HashSet<_>>();
        assert_eq!(species.len(), 6, "seed {seed}");
        assert!(
            species
                .iter()
                .all(|id| sets.bss_factory_sets().contains_key(id))
        );

        let items = team
            .members
            .iter()
            .filter_map(|mon| mon.item.as_deref())
            .collect::<Vec<_>>();
        let unique_items = items.iter().collect::<HashSet<_>>();
        assert_eq!(unique_items.len(), items.len(), "seed {seed}: {items:?}");
    }
}

#[test]
fn uses_set_nickname() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..10 {
        let team = RandomTeamGenerator::new(
            bss_factory("[]"),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .get_team()
        .unwrap();
        for mon in &team.members {
            if mon.species == "Hatterene" {
                assert_eq!(mon.name, "Witch");
            } else {
                assert_eq!(mon.name, mon.species);
            }
        }
    }
}

#[test]
fn smaller_teams_are_supported() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let team = RandomTeamGenerator::new(
        bss_factory(r#"["Max Team Size = 3"]"#),
        static_local_data_store(),
        &sets,
        Some(6),
    )
    .unwrap()
    .get_team()
    .unwrap();
    assert_eq!(team.members.len(), 3);
}
