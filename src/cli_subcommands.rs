mod applications;
mod config;
mod records;

pub(crate) use self::applications::ApplicationCommands;
pub(crate) use self::config::ConfigCommands;
pub(crate) use self::records::RecordCommands;
