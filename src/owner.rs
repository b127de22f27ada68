//! User and group name resolution by numeric id. Absence of a database
//! entry falls back to numeric-id text at the call site.

use users::{get_group_by_gid, get_user_by_uid};

pub fn user_name(uid: u32) -> Option<String> {
    get_user_by_uid(uid).map(|u| u.name().to_string_lossy().into_owned())
}

pub fn group_name(gid: u32) -> Option<String> {
    get_group_by_gid(gid).map(|g| g.name().to_string_lossy().into_owned())
}
