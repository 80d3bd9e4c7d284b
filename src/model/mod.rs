mod common;
mod match_info;
mod player;
mod stat;

pub use common::*;
pub use match_info::*;
pub use player::*;
pub use stat::*;
