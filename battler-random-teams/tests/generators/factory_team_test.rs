use ahash::HashSet;
use battler_data::{
    Id,
    Tier,
};
use battler_random_teams::{
    Format,
    RandomTeamGenerator,
    SetCatalog,
    SetRepository,
    TeamData,
};
use battler_test_utils::{
    setup_test_environment,
    static_local_data_store,
    test_sets_dir,
};
use pretty_assertions::assert_eq;

fn battle_factory() -> Format {
    Format::new(
        serde_json::from_str(
            r#"{
                "name": "Battle Factory",
                "team_generator": "Factory"
            }"#,
        )
        .unwrap(),
    )
    .unwrap()
}

fn count_move(team: &TeamData, name: &str) -> usize {
    team.members
        .iter()
        .filter(|mon| mon.moves.iter().any(|move_name| move_name == name))
        .count()
}

fn count_item(team: &TeamData, name: &str) -> usize {
    team.members
        .iter()
        .filter(|mon| mon.item.as_deref() == Some(name))
        .count()
}

#[test]
fn builds_full_team_from_locked_tier() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let catalog = sets.factory_sets(Tier::OU).unwrap();
    for seed in 0..5 {
        let mut generator = RandomTeamGenerator::new(
            battle_factory(),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .with_factory_tier(Tier::OU);
        let team = generator.get_team().unwrap();
        assert_eq!(team.members.len(), 6, "seed {seed}");
        let species = team
            .members
            .iter()
            .map(|mon| Id::from(mon.species.as_str()))
            .collect::<HashSet<_>>();
        assert_eq!(species.len(), 6, "seed {seed}");
        assert!(species.iter().all(|id| catalog.contains_key(id)), "seed {seed}");
        assert!(team.members.iter().all(|mon| mon.level == 100));
        assert_eq!(generator.factory_tier(), Some(Tier::OU));
    }
}

#[test]
fn limits_hazards_and_choice_items() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..10 {
        let team = RandomTeamGenerator::new(
            battle_factory(),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .with_factory_tier(Tier::OU)
        .get_team()
        .unwrap();
        for hazard in ["Stealth Rock", "Spikes", "Toxic Spikes", "Rapid Spin", "Defog"] {
            assert!(count_move(&team, hazard) <= 1, "seed {seed}: {hazard}");
        }
        for item in ["Choice Band", "Choice Scarf", "Choice Specs"] {
            assert!(count_item(&team, item) <= 1, "seed {seed}: {item}");
        }
    }
}

#[test]
fn balanced_team_sets_and_clears_hazards() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    for seed in 0..5 {
        let team = RandomTeamGenerator::new(
            battle_factory(),
            static_local_data_store(),
            &sets,
            Some(seed),
        )
        .unwrap()
        .with_factory_tier(Tier::OU)
        .get_team()
        .unwrap();
        assert_eq!(count_move(&team, "Stealth Rock"), 1, "seed {seed}");
        assert_eq!(
            count_move(&team, "Rapid Spin") + count_move(&team, "Defog"),
            1,
            "seed {seed}"
        );
    }
}

#[test]
fn keeps_rolled_tier_across_reseeds() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let mut generator =
        RandomTeamGenerator::new(battle_factory(), static_local_data_store(), &sets, Some(4))
            .unwrap();
    assert_eq!(generator.factory_tier(), None);
    generator.get_team().unwrap();
    let tier = generator.factory_tier().unwrap();
    assert!([Tier::OU, Tier::UU].contains(&tier));

    generator.set_seed(10);
    let team = generator.get_team().unwrap();
    assert_eq!(generator.factory_tier(), Some(tier));
    let catalog = sets.factory_sets(tier).unwrap();
    assert!(
        team.members
            .iter()
            .all(|mon| catalog.contains_key(&Id::from(mon.species.as_str())))
    );
}

#[test]
fn adjust_level_overrides_set_level() {
    setup_test_environment();
    let sets = SetCatalog::new(test_sets_dir()).unwrap();
    let format = Format::new(
        serde_json::from_str(
            r#"{
                "name": "Battle Factory",
                "team_generator": "Factory",
                "rules": ["Adjust Level = 50"]
            }"#,
        )
        .unwrap(),
    )
    .unwrap();
    let team = RandomTeamGenerator::new(format, static_local_data_store(), &sets, Some(2))
        .unwrap()
        .with_factory_tier(Tier::UU)
        .get_team()
        .unwrap();
    assert!(team.members.iter().all(|mon| mon.level == 50));
}
