use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Move flags, which categorize moves for miscellaneous behavior (such as ability synergies).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveFlag {
    /// A bite move.
    #[string = "Bite"]
    Bite,
    /// A bullet move.
    #[string = "Bullet"]
    Bullet,
    /// Makes contact.
    #[string = "Contact"]
    Contact,
    /// A move with crash damage.
    #[string = "CrashDamage"]
    CrashDamage,
    /// A dance move.
    #[string = "Dance"]
    Dance,
    /// A healing move.
    #[string = "Heal"]
    Heal,
    /// A punch move.
    #[string = "Punch"]
    Punch,
    /// A pulse move.
    #[string = "Pulse"]
    Pulse,
    /// A slicing move.
    #[string = "Slicing"]
    Slicing,
    /// A sound move.
    #[string = "Sound"]
    Sound,
    /// A wind move.
    #[string = "Wind"]
    Wind,
    /// A Z-Move.
    #[string = "Z"]
    Z,
    /// A Max Move.
    #[string = "Max"]
    Max,
}

#[cfg(test)]
mod move_flag_test {
    use crate::{
        MoveFlag,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(MoveFlag::Bite, "Bite");
        test_string_serialization(MoveFlag::CrashDamage, "CrashDamage");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("punch", MoveFlag::Punch);
        test_string_deserialization("sound", MoveFlag::Sound);
    }
}
