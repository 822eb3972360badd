mod store;

pub use store::{ConfigStore, LauncherConfig};
