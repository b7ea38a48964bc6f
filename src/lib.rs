//! rHOST - Node.js-style operating system queries over native FFI
//!
//! This library answers host OS questions (uptime, memory totals, hostname,
//! load average, kernel release, path defaults) by invoking platform-native
//! entry points directly and decoding their raw result buffers by hand.
//! Queries never fail: unsupported hosts and failed native calls degrade to
//! documented neutral defaults.

// 导出所有公共模块
pub mod decode;
pub mod ffi;
pub mod os;

// 重新导出常用类型，使其可以直接从 crate 根访问
pub use crate::ffi::types::{MemoryStatus, PointerWidth, Result, SysInfoResult, SystemError};
pub use crate::os::platform::Platform;
pub use crate::os::query::{
    arch, cpus, endianness, freemem, get_network_interfaces, homedir, hostname, loadavg,
    network_interfaces, os_type, platform, release, snapshot, tmpdir, totalmem, uptime, CpuInfo,
    NetworkInterface, OsSnapshot, EOL,
};

/// 库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 初始化日志系统
///
/// 这个函数应该在使用库之前调用；重复调用是无害的
pub fn init() {
    // 初始化日志
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = env_logger::try_init();

    log::debug!(
        "rHOST {} on {:?} ({}, {})",
        VERSION,
        Platform::current(),
        arch(),
        endianness()
    );
}
