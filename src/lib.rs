pub mod app;
pub mod config;
pub mod export;
pub mod fetch;
pub mod format;
pub mod model;
pub mod normalize;
pub mod select;
pub mod states;

pub use app::{App, InfoPanel};
pub use config::Config;
pub use fetch::{DataProvider, HttpProvider, StaticProvider};
pub use model::{Dataset, StateRecord};
pub use select::SelectOption;
