mod build_context;
mod mon_data;
mod team_details;

pub use build_context::BuildContext;
pub use mon_data::{
    MonData,
    TeamData,
};
pub use team_details::{
    FactoryTeamDetails,
    TeamDetails,
};
