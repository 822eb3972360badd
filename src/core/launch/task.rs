// ─── Launch Task ───
// Spawns the game as a fully detached process. The launcher's contract
// ends at successful process creation: the child is never tracked, and its
// exit is invisible to us.

use std::path::{Path, PathBuf};
use std::process::Stdio;

#[cfg(target_os = "windows")]
use std::os::windows::process::CommandExt;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

use tracing::info;

use crate::core::config::ConfigStore;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::locate;

/// Launch the game. With no explicit path, the same locate-or-fail search
/// used by [`locate::locate_executable`] runs inline.
///
/// The process starts in the executable's own directory so the game
/// resolves its relative-path assets correctly. The mods directory is
/// accepted for interface compatibility and logged; the game discovers its
/// mods itself.
pub async fn launch_game(
    config_store: &ConfigStore,
    exe_path: Option<PathBuf>,
    mods_dir: Option<PathBuf>,
) -> LauncherResult<()> {
    let exe = match exe_path {
        Some(path) => path,
        None => locate::locate_executable(config_store).await?,
    };

    let exe_dir = exe
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut cmd = std::process::Command::new(&exe);
    cmd.current_dir(&exe_dir);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());
    configure_detached_spawn(&mut cmd);

    if let Some(mods_dir) = &mods_dir {
        info!("Launching with mods directory {:?}", mods_dir);
    }
    info!("Launching Hytale: {:?}", exe);

    let child = cmd.spawn().map_err(|source| LauncherError::Io {
        path: exe.clone(),
        source,
    })?;

    // Fire-and-forget: dropping the handle leaves the game unsupervised.
    drop(child);
    Ok(())
}

fn configure_detached_spawn(cmd: &mut std::process::Command) {
    #[cfg(target_os = "windows")]
    {
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }

    #[cfg(unix)]
    {
        // New process group: the game outlives the launcher and ignores
        // terminal signals sent to it.
        cmd.process_group(0);
    }
}
