use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A competitive usage tier.
///
/// Tiers are ordered from strongest to weakest. Banlist tiers ("BL") sit between the tier they are
/// banned from and the tier above it.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Tier {
    #[string = "AG"]
    AG,
    #[string = "Uber"]
    #[alias = "(Uber)"]
    Uber,
    #[string = "OU"]
    #[alias = "(OU)"]
    OU,
    #[string = "UUBL"]
    UUBL,
    #[string = "UU"]
    UU,
    #[string = "RUBL"]
    RUBL,
    #[string = "RU"]
    RU,
    #[string = "NUBL"]
    NUBL,
    #[string = "NU"]
    #[alias = "(NU)"]
    NU,
    #[string = "PUBL"]
    PUBL,
    #[string = "PU"]
    PU,
    #[string = "(PU)"]
    #[alias = "ZU"]
    ZU,
    #[string = "NFE"]
    NFE,
    #[string = "LC"]
    LC,
    #[string = "CAP"]
    CAP,
    #[string = "Illegal"]
    #[default]
    Illegal,
    #[string = "Unreleased"]
    Unreleased,
}

#[cfg(test)]
mod tier_test {
    use crate::{
        Tier,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Tier::Uber, "Uber");
        test_string_serialization(Tier::ZU, "(PU)");
    }

    #[test]
    fn deserializes_aliases() {
        test_string_deserialization("(OU)", Tier::OU);
        test_string_deserialization("zu", Tier::ZU);
        test_string_deserialization("nfe", Tier::NFE);
    }

    #[test]
    fn orders_strongest_first() {
        assert!(Tier::Uber < Tier::OU);
        assert!(Tier::UUBL < Tier::UU);
        assert!(Tier::PU < Tier::ZU);
    }
}
