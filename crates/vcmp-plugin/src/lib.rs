//! Plugin entry point (§2, §9): the `cdylib` boundary the host
//! `dlopen`s. `VcmpPluginInit` is the only symbol the host calls
//! directly; everything else lives behind the safe [`vcmp_core::runtime::Runtime`]
//! it builds.
//!
//! Grounded on `myq2-game-dll`'s `GetGameApi` entry point: accept the
//! host's import table, build the safe adapter over it, hand back an
//! export table of trampolines. `tracing-subscriber` init on first call
//! mirrors the same crate's logging setup (SPEC_FULL.md §10.B).

mod abi;
mod adapter;
mod callbacks;

use std::os::raw::c_char;
use std::sync::Once;

use vcmp_core::runtime::Runtime;

use abi::{PluginCallbacks, PluginFuncs, PluginInfo, PLUGIN_API_MAJOR, PLUGIN_API_MINOR};

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_env("VCMP_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

/// The host's plugin load entry point. Copies the import table,
/// constructs the one process-wide [`Runtime`], fills the callback
/// table with trampolines, and reports our identity/API version back.
///
/// # Safety
/// Called by the host exactly once per load, with three valid,
/// non-null, writable pointers sized per the real header's structs.
#[no_mangle]
pub unsafe extern "C" fn VcmpPluginInit(functions: *mut PluginFuncs, callbacks: *mut PluginCallbacks, info: *mut PluginInfo) -> u8 {
    if functions.is_null() || callbacks.is_null() || info.is_null() {
        return 0;
    }

    init_logging();

    let funcs = *functions;
    let host = adapter::RealHostAdapter::new(funcs);
    let plugin_info = adapter::plugin_info("vcmp-core-plugin", 0x0100);
    callbacks::install(Runtime::new(host));
    callbacks::fill(&mut *callbacks);

    write_plugin_info(&mut *info, &plugin_info);
    tracing::info!("plugin initialised");
    1
}

fn write_plugin_info(out: &mut PluginInfo, info: &vcmp_core::host::PluginInfo) {
    out.structSize = std::mem::size_of::<PluginInfo>() as u32;
    out.pluginVersion = info.version;
    out.apiMajorVersion = PLUGIN_API_MAJOR;
    out.apiMinorVersion = PLUGIN_API_MINOR;
    out.name = [0 as c_char; 32];
    let bytes = info.name.as_bytes();
    let n = bytes.len().min(out.name.len() - 1);
    for (slot, &b) in out.name.iter_mut().zip(bytes[..n].iter()) {
        *slot = b as c_char;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `callbacks::RUNTIME` is a process-wide `OnceLock` — this is the
    /// only test in the crate allowed to call `VcmpPluginInit`, since a
    /// second call anywhere else in this test binary would panic on the
    /// already-set lock.
    #[test]
    fn init_with_an_all_none_function_table_still_reports_success_and_fills_callbacks() {
        let mut functions = PluginFuncs::default();
        let mut callbacks = PluginCallbacks::default();
        let mut info = PluginInfo::default();

        let ok = unsafe { VcmpPluginInit(&mut functions, &mut callbacks, &mut info) };

        assert_eq!(ok, 1);
        assert!(callbacks.OnServerFrame.is_some());
        assert_eq!(info.apiMajorVersion, PLUGIN_API_MAJOR);
        assert_eq!(info.apiMinorVersion, PLUGIN_API_MINOR);
        assert_eq!(info.structSize as usize, std::mem::size_of::<PluginInfo>());
    }

    #[test]
    fn init_rejects_null_pointers() {
        let mut functions = PluginFuncs::default();
        let mut callbacks = PluginCallbacks::default();
        let mut info = PluginInfo::default();
        assert_eq!(unsafe { VcmpPluginInit(std::ptr::null_mut(), &mut callbacks, &mut info) }, 0);
        assert_eq!(unsafe { VcmpPluginInit(&mut functions, std::ptr::null_mut(), &mut info) }, 0);
        assert_eq!(unsafe { VcmpPluginInit(&mut functions, &mut callbacks, std::ptr::null_mut()) }, 0);
    }
}
