use battler_data::{
    StatTable,
    Tier,
};

/// Level for a random set in the given tier, so that weaker tiers get a higher level.
pub fn tier_level(tier: Tier) -> u8 {
    match tier {
        Tier::Uber => 76,
        Tier::OU => 80,
        Tier::UUBL => 81,
        Tier::UU => 82,
        Tier::RUBL => 83,
        Tier::RU => 84,
        Tier::NUBL => 85,
        Tier::NU => 86,
        Tier::PUBL => 87,
        Tier::PU | Tier::ZU | Tier::NFE => 88,
        _ => 80,
    }
}

/// The lowest modified base stat total of any species.
const MIN_MODIFIED_STAT_TOTAL: f64 = 1307.0;

/// Lowest level at which the species' modified stat total reaches that of the weakest species.
///
/// Stats assume 31 IVs and 85 EVs. Attacking stats are scaled by level a second time, since damage
/// is roughly proportional to level.
pub fn balanced_level(stats: &StatTable) -> u8 {
    let modified = |base: u16| f64::from(base) * 2.0 + 31.0 + 21.0 + 100.0;
    let total = modified(stats.hp)
        + 10.0
        + [stats.atk, stats.def, stats.spa, stats.spd, stats.spe]
            .into_iter()
            .map(|base| modified(base) + 5.0)
            .sum::<f64>();
    let mut level = (100.0 * MIN_MODIFIED_STAT_TOTAL / total).floor().min(100.0) as u8;
    while level < 100 {
        let scale = f64::from(level) / 100.0;
        let stat = |base: u16, offset: f64| (modified(base) * scale + offset).floor();
        let attacking = |base: u16| ((modified(base) * scale + 5.0) * scale).floor();
        let total = stat(stats.hp, 10.0)
            + attacking(stats.atk)
            + stat(stats.def, 5.0)
            + attacking(stats.spa)
            + stat(stats.spd, 5.0)
            + stat(stats.spe, 5.0);
        if total >= MIN_MODIFIED_STAT_TOTAL {
            break;
        }
        level += 1;
    }
    level
}

#[cfg(test)]
mod level_test {
    use battler_data::{
        StatTable,
        Tier,
    };

    use crate::generator::{
        balanced_level,
        tier_level,
    };

    #[test]
    fn weaker_tiers_have_higher_levels() {
        assert_eq!(tier_level(Tier::Uber), 76);
        assert_eq!(tier_level(Tier::OU), 80);
        assert_eq!(tier_level(Tier::ZU), 88);
        assert_eq!(tier_level(Tier::LC), 80);
        assert!(tier_level(Tier::NU) > tier_level(Tier::UU));
    }

    #[test]
    fn weakest_species_is_level_100() {
        assert_eq!(balanced_level(&StatTable::uniform(30)), 100);
    }

    #[test]
    fn stronger_species_are_balanced_lower() {
        let arceus = balanced_level(&StatTable::uniform(120));
        let garchomp = balanced_level(&StatTable {
            hp: 108,
            atk: 130,
            def: 95,
            spa: 80,
            spd: 85,
            spe: 102,
        });
        assert!(arceus < garchomp);
        assert!(garchomp < 100);
        assert!(arceus > 50);
    }
}
