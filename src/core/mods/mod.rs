mod library;
mod model;

pub use library::{
    delete_mod, install_mod_file, list_mods, set_mod_enabled, DISABLED_SUFFIX, MOD_EXTENSIONS,
};
pub use model::ModRecord;
