//! One module per subcommand, each exposing `execute`.

pub mod add;
pub mod delete;
pub mod generate;
pub mod get;
pub mod list;
pub mod modify;
