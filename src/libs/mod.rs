//! Domain records and the shared plumbing around them.
//!
//! - Records: [`teacher`], [`group`], [`parent`], [`child`], [`attendance`],
//!   [`summary`], with enums built by [`coded_enum!`](crate::coded_enum).
//! - Helpers: [`age`], [`formatter`].
//! - Front-end support: [`config`], [`data_storage`], [`logging`],
//!   [`messages`], [`view`].

#[macro_use]
pub mod coded;

pub mod age;
pub mod attendance;
pub mod child;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod group;
pub mod logging;
pub mod messages;
pub mod parent;
pub mod summary;
pub mod teacher;
pub mod view;
