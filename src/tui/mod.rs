//! Terminal UI runtime and apps

pub mod app;
pub mod apps;
pub mod command;
pub mod runtime;
pub mod subscription;
pub mod theme;

pub use app::App;
pub use command::Command;
pub use runtime::Runtime;
pub use subscription::Subscription;
pub use theme::{Theme, ThemeVariant};
