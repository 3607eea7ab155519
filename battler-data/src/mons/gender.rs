use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The gender of a specific Mon.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Gender {
    #[string = "U"]
    #[alias = "Unknown"]
    #[alias = "N"]
    #[default]
    Unknown,
    #[string = "F"]
    #[alias = "Female"]
    Female,
    #[string = "M"]
    #[alias = "Male"]
    Male,
}

impl Gender {
    /// The gender forced by a species gender ratio, if any.
    ///
    /// 0 is male only, 254 is female only, and 255 is genderless.
    pub fn fixed_by_ratio(gender_ratio: u8) -> Option<Gender> {
        match gender_ratio {
            0 => Some(Gender::Male),
            254 => Some(Gender::Female),
            255 => Some(Gender::Unknown),
            _ => None,
        }
    }
}
