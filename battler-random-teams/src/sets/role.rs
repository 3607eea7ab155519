use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The job a Mon is built to perform on its team.
///
/// Every random set template is tagged with a role, which steers move, item, and stat choices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Role {
    #[string = "Fast Attacker"]
    FastAttacker,
    #[string = "Setup Sweeper"]
    SetupSweeper,
    #[string = "Wallbreaker"]
    Wallbreaker,
    #[string = "Tera Blast user"]
    TeraBlastUser,
    #[string = "Bulky Attacker"]
    BulkyAttacker,
    #[string = "Bulky Setup"]
    BulkySetup,
    #[string = "Fast Bulky Setup"]
    FastBulkySetup,
    #[string = "Bulky Support"]
    BulkySupport,
    #[string = "Fast Support"]
    FastSupport,
    #[string = "AV Pivot"]
    AvPivot,
    #[string = "Doubles Fast Attacker"]
    DoublesFastAttacker,
    #[string = "Doubles Setup Sweeper"]
    DoublesSetupSweeper,
    #[string = "Doubles Wallbreaker"]
    DoublesWallbreaker,
    #[string = "Doubles Bulky Attacker"]
    DoublesBulkyAttacker,
    #[string = "Doubles Bulky Setup"]
    DoublesBulkySetup,
    #[string = "Doubles Support"]
    DoublesSupport,
    #[string = "Choice Item user"]
    ChoiceItemUser,
    #[string = "Offensive Protect"]
    OffensiveProtect,
}

impl Role {
    /// Checks if the role is built around a setup move.
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            Self::SetupSweeper
                | Self::BulkySetup
                | Self::FastBulkySetup
                | Self::DoublesSetupSweeper
                | Self::DoublesBulkySetup
        )
    }
}

#[cfg(test)]
mod role_test {
    use std::str::FromStr;

    use crate::sets::Role;

    #[test]
    fn parses_role_labels() {
        assert_eq!(Role::from_str("Tera Blast user").unwrap(), Role::TeraBlastUser);
        assert_eq!(Role::from_str("av pivot").unwrap(), Role::AvPivot);
        assert_eq!(Role::FastBulkySetup.to_string(), "Fast Bulky Setup");
    }

    #[test]
    fn setup_roles_contain_setup() {
        for role in [
            Role::SetupSweeper,
            Role::BulkySetup,
            Role::FastBulkySetup,
            Role::DoublesSetupSweeper,
            Role::DoublesBulkySetup,
        ] {
            assert!(role.is_setup());
            assert!(role.to_string().contains("Setup"));
        }
        assert!(!Role::TeraBlastUser.is_setup());
        assert!(!Role::BulkySupport.is_setup());
    }
}
