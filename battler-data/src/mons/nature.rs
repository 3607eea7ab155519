use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The nature of a Mon, which boosts one stat and drops another.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "Adamant"]
    Adamant,
    #[string = "Bashful"]
    Bashful,
    #[string = "Bold"]
    Bold,
    #[string = "Brave"]
    Brave,
    #[string = "Calm"]
    Calm,
    #[string = "Careful"]
    Careful,
    #[string = "Docile"]
    Docile,
    #[string = "Gentle"]
    Gentle,
    #[string = "Hardy"]
    #[default]
    Hardy,
    #[string = "Hasty"]
    Hasty,
    #[string = "Impish"]
    Impish,
    #[string = "Jolly"]
    Jolly,
    #[string = "Lax"]
    Lax,
    #[string = "Lonely"]
    Lonely,
    #[string = "Mild"]
    Mild,
    #[string = "Modest"]
    Modest,
    #[string = "Naive"]
    Naive,
    #[string = "Naughty"]
    Naughty,
    #[string = "Quiet"]
    Quiet,
    #[string = "Quirky"]
    Quirky,
    #[string = "Rash"]
    Rash,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Sassy"]
    Sassy,
    #[string = "Serious"]
    Serious,
    #[string = "Timid"]
    Timid,
}

impl Nature {
    /// All natures, in alphabetical order.
    pub const ALL: [Nature; 25] = [
        Nature::Adamant,
        Nature::Bashful,
        Nature::Bold,
        Nature::Brave,
        Nature::Calm,
        Nature::Careful,
        Nature::Docile,
        Nature::Gentle,
        Nature::Hardy,
        Nature::Hasty,
        Nature::Impish,
        Nature::Jolly,
        Nature::Lax,
        Nature::Lonely,
        Nature::Mild,
        Nature::Modest,
        Nature::Naive,
        Nature::Naughty,
        Nature::Quiet,
        Nature::Quirky,
        Nature::Rash,
        Nature::Relaxed,
        Nature::Sassy,
        Nature::Serious,
        Nature::Timid,
    ];
}

#[cfg(test)]
mod nature_test {
    use crate::{
        Nature,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Nature::Adamant, "Adamant");
        test_string_serialization(Nature::Serious, "Serious");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("jolly", Nature::Jolly);
        test_string_deserialization("timid", Nature::Timid);
    }
}
