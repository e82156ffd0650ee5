pub mod add;
pub mod common;
pub mod completions;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;
