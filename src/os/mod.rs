//! 面向调用方的查询层：平台分发和中性默认值

pub mod platform;
pub mod query;

pub use platform::Platform;
pub use query::{
    arch, cpus, endianness, freemem, get_network_interfaces, homedir, hostname, loadavg,
    network_interfaces, os_type, platform, release, snapshot, tmpdir, totalmem, uptime, CpuInfo,
    NetworkInterface, OsSnapshot, EOL,
};
