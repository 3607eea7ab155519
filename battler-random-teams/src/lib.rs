extern crate alloc;

pub mod abilities;
pub mod config;
pub mod dex;
pub mod error;
pub mod generator;
pub mod items;
pub mod moves;
pub mod sets;
pub mod teams;

pub use config::{
    Format,
    FormatData,
    TeamGenerator,
};
pub use generator::RandomTeamGenerator;
pub use sets::{
    SetCatalog,
    SetRepository,
};
pub use teams::{
    MonData,
    TeamData,
};
