//! CLI subcommands.

pub mod bonus;
pub mod calculate;
pub mod compare;
pub mod months;
pub mod theme;

pub use bonus::BonusCommand;
pub use calculate::CalculateCommand;
pub use compare::CompareCommand;
pub use months::MonthsCommand;
pub use theme::ThemeCommand;
