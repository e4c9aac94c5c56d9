#![allow(dead_code)]

use desk_core::{CollectionKind, DeskConfig, MemorySource};
use desk_search::Desk;

pub const USERS: &str = include_str!("../../../data/users.json");
pub const ORGANIZATIONS: &str = include_str!("../../../data/organizations.json");
pub const TICKETS: &str = include_str!("../../../data/tickets.json");

pub const GUYANA: &str = "27c447d9-cfda-4415-9a72-d5aa12942cf1";
pub const TURKS: &str = "89255552-e9a2-433b-970a-af194b3a39dd";
pub const ETHIOPIA: &str = "c22aaced-7faa-4b5c-99e5-1a209500ff16";
pub const LATVIA: &str = "6aac0369-a7e5-4417-8b50-92528ef485d3";

pub fn source() -> MemorySource {
    MemorySource::new()
        .with(CollectionKind::Users, USERS)
        .with(CollectionKind::Organizations, ORGANIZATIONS)
        .with(CollectionKind::Tickets, TICKETS)
}

pub fn desk() -> Desk {
    desk_search::build_from(DeskConfig::new(), &source()).unwrap()
}
