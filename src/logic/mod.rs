//! Tournament business logic: shuffling, player allocation, schedule generation.

mod allocation;
mod schedule;
mod shuffle;

pub use allocation::allocate;
pub use schedule::{
    build_schedule, generate_schedule, group_count, group_size, groups_from_seeding,
    knockout_from_seeding, round_robin, Bracket, Schedule, MAX_GROUP_SIZE,
};
pub use shuffle::shuffled;
