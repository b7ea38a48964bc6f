use std::collections::BTreeMap;
use std::path::PathBuf;

use log::debug;
use serde::Serialize;

use crate::ffi::buffer::RawBuffer;
use crate::ffi::safe_wrapper::SystemInterface;
use crate::os::platform::Platform;

/// 平台的行结束符
pub const EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// 内存查询未知时返回的哨兵值
const MEM_UNKNOWN: u64 = u64::MAX;

/// CPU 条目（本层不枚举 CPU，类型只为稳定接口而保留）
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CpuInfo {
    pub model: String,
    pub speed: u64,
}

/// 网络接口条目（同上，本层不做接口枚举）
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct NetworkInterface {
    pub address: String,
    pub family: String,
}

/// 系统启动以来的秒数，不支持的平台返回 0
pub fn uptime() -> i64 {
    uptime_for(Platform::current())
}

pub(crate) fn uptime_for(platform: Platform) -> i64 {
    let iface = SystemInterface::new();
    match platform {
        Platform::Linux => match iface.system_info() {
            Ok(info) => info.uptime,
            Err(e) => {
                debug!("uptime unavailable: {}", e);
                0
            }
        },
        Platform::Windows => match iface.tick_count() {
            Ok(millis) => (millis / 1000) as i64,
            Err(e) => {
                debug!("uptime unavailable: {}", e);
                0
            }
        },
        Platform::Darwin | Platform::FreeBsd | Platform::Qnx | Platform::Barebone => 0,
    }
}

/// 空闲物理内存字节数，未知时返回最大值哨兵
pub fn freemem() -> u64 {
    freemem_for(Platform::current())
}

pub(crate) fn freemem_for(platform: Platform) -> u64 {
    let iface = SystemInterface::new();
    match platform {
        Platform::Linux => match iface.system_info() {
            Ok(info) => info.freeram,
            Err(e) => {
                debug!("freemem unavailable: {}", e);
                MEM_UNKNOWN
            }
        },
        Platform::Windows => match iface.memory_status() {
            Ok(status) => status.avail_phys,
            Err(e) => {
                debug!("freemem unavailable: {}", e);
                MEM_UNKNOWN
            }
        },
        Platform::Darwin | Platform::FreeBsd | Platform::Qnx | Platform::Barebone => MEM_UNKNOWN,
    }
}

/// 物理内存总字节数，未知时返回最大值哨兵
pub fn totalmem() -> u64 {
    totalmem_for(Platform::current())
}

pub(crate) fn totalmem_for(platform: Platform) -> u64 {
    let iface = SystemInterface::new();
    match platform {
        Platform::Linux => match iface.system_info() {
            Ok(info) => info.totalram,
            Err(e) => {
                debug!("totalmem unavailable: {}", e);
                MEM_UNKNOWN
            }
        },
        Platform::Windows => match iface.memory_status() {
            Ok(status) => status.total_phys,
            Err(e) => {
                debug!("totalmem unavailable: {}", e);
                MEM_UNKNOWN
            }
        },
        Platform::Darwin | Platform::FreeBsd | Platform::Qnx | Platform::Barebone => MEM_UNKNOWN,
    }
}

/// 1/5/15 分钟负载平均值，不支持的平台全为 0
pub fn loadavg() -> [f64; 3] {
    loadavg_for(Platform::current())
}

pub(crate) fn loadavg_for(platform: Platform) -> [f64; 3] {
    let iface = SystemInterface::new();
    match platform {
        Platform::Linux => match iface.load_average() {
            Ok(loads) => loads,
            Err(e) => {
                debug!("loadavg unavailable: {}", e);
                [0.0; 3]
            }
        },
        // windows 没有 loadavg 的概念
        Platform::Windows
        | Platform::Darwin
        | Platform::FreeBsd
        | Platform::Qnx
        | Platform::Barebone => [0.0; 3],
    }
}

/// 主机名，不支持的平台返回空串
pub fn hostname() -> String {
    hostname_for(Platform::current())
}

pub(crate) fn hostname_for(platform: Platform) -> String {
    let iface = SystemInterface::new();
    match platform {
        Platform::Linux | Platform::Windows => match iface.hostname() {
            Ok(name) => name,
            Err(e) => {
                debug!("hostname unavailable: {}", e);
                String::new()
            }
        },
        Platform::Darwin | Platform::FreeBsd | Platform::Qnx | Platform::Barebone => String::new(),
    }
}

/// 内核 release 字符串，不支持的平台返回空串
pub fn release() -> String {
    release_for(Platform::current())
}

pub(crate) fn release_for(platform: Platform) -> String {
    let iface = SystemInterface::new();
    match platform {
        Platform::Linux => match iface.kernel_release() {
            Ok(release) => release,
            Err(e) => {
                debug!("release unavailable: {}", e);
                String::new()
            }
        },
        Platform::Windows
        | Platform::Darwin
        | Platform::FreeBsd
        | Platform::Qnx
        | Platform::Barebone => String::new(),
    }
}

/// 字节序标识："LE" 或 "BE"
///
/// 向缓冲区写入 4 字节值 1，最低地址读回 1 即为小端。
pub fn endianness() -> &'static str {
    let mut buf: RawBuffer<4> = RawBuffer::new();
    buf.write_u32(0, 1);
    if buf.read_u8(0) == 1 {
        "LE"
    } else {
        "BE"
    }
}

/// 操作系统家族名（例如 "Linux"、"Windows_NT"）
pub fn os_type() -> &'static str {
    Platform::current().os_type()
}

/// 宿主架构标识符，直接取自编译目标
pub fn arch() -> &'static str {
    std::env::consts::ARCH
}

/// 平台标识符，windows 映射为 "win32"
pub fn platform() -> &'static str {
    Platform::current().normalized()
}

/// 临时目录路径
pub fn tmpdir() -> PathBuf {
    std::env::temp_dir()
}

/// 用户主目录路径，未知时为空路径
pub fn homedir() -> PathBuf {
    dirs::home_dir().unwrap_or_default()
}

/// CPU 列表（本层不实现枚举，恒为空）
pub fn cpus() -> Vec<CpuInfo> {
    Vec::new()
}

/// 网络接口映射（本层不实现枚举，恒为空）
pub fn network_interfaces() -> BTreeMap<String, Vec<NetworkInterface>> {
    BTreeMap::new()
}

/// `network_interfaces` 的别名，保留兼容的导出面
pub fn get_network_interfaces() -> BTreeMap<String, Vec<NetworkInterface>> {
    network_interfaces()
}

/// 所有查询在当前时刻的聚合结果
#[derive(Debug, Clone, Serialize)]
pub struct OsSnapshot {
    pub hostname: String,
    pub os_type: &'static str,
    pub platform: &'static str,
    pub arch: &'static str,
    pub release: String,
    pub endianness: &'static str,
    pub uptime: i64,
    pub totalmem: u64,
    pub freemem: u64,
    pub loadavg: [f64; 3],
    pub tmpdir: PathBuf,
    pub homedir: PathBuf,
    pub eol: &'static str,
    pub cpus: Vec<CpuInfo>,
    pub network_interfaces: BTreeMap<String, Vec<NetworkInterface>>,
}

/// 采集一次完整的快照
pub fn snapshot() -> OsSnapshot {
    OsSnapshot {
        hostname: hostname(),
        os_type: os_type(),
        platform: platform(),
        arch: arch(),
        release: release(),
        endianness: endianness(),
        uptime: uptime(),
        totalmem: totalmem(),
        freemem: freemem(),
        loadavg: loadavg(),
        tmpdir: tmpdir(),
        homedir: homedir(),
        eol: EOL,
        cpus: cpus(),
        network_interfaces: network_interfaces(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_platform_never_panics() {
        // 每个平台分支都必须返回文档化类型的值，而不是错误
        for platform in Platform::ALL {
            assert!(uptime_for(platform) >= 0);
            let _ = freemem_for(platform);
            let _ = totalmem_for(platform);
            assert!(loadavg_for(platform).iter().all(|&l| l >= 0.0));
            let _ = hostname_for(platform);
            let _ = release_for(platform);
        }
    }

    #[test]
    fn test_unsupported_platform_defaults() {
        assert_eq!(uptime_for(Platform::Qnx), 0);
        assert_eq!(uptime_for(Platform::Barebone), 0);
        assert_eq!(freemem_for(Platform::Darwin), u64::MAX);
        assert_eq!(totalmem_for(Platform::FreeBsd), u64::MAX);
        assert_eq!(loadavg_for(Platform::Windows), [0.0; 3]);
        assert_eq!(hostname_for(Platform::Darwin), "");
        assert_eq!(release_for(Platform::Qnx), "");
    }

    #[test]
    fn test_endianness_deterministic() {
        let first = endianness();
        assert!(first == "LE" || first == "BE");
        assert_eq!(first, endianness());
        // 与原生字节序的定义一致
        let expected = if 1u32.to_ne_bytes()[0] == 1 { "LE" } else { "BE" };
        assert_eq!(first, expected);
    }

    #[test]
    fn test_stub_queries_are_empty() {
        assert!(cpus().is_empty());
        assert!(network_interfaces().is_empty());
        assert!(get_network_interfaces().is_empty());
    }

    #[test]
    fn test_eol_constant() {
        if cfg!(windows) {
            assert_eq!(EOL, "\r\n");
        } else {
            assert_eq!(EOL, "\n");
        }
        assert_eq!(EOL, Platform::current().eol());
    }

    #[test]
    fn test_tmpdir_is_usable() {
        // 返回的临时目录必须真实可写
        let dir = tempfile::tempdir_in(tmpdir()).expect("tmpdir not writable");
        assert!(dir.path().exists());
    }

    #[test]
    fn test_identity_queries() {
        assert!(!arch().is_empty());
        assert!(!os_type().is_empty());
        assert!(!platform().is_empty());
    }

    #[test_log::test]
    #[cfg(target_os = "linux")]
    fn test_live_linux_queries() {
        assert!(uptime() > 0);
        let total = totalmem();
        let free = freemem();
        assert!(total > 0 && total < u64::MAX);
        assert!(free <= total);
        assert!(!hostname().is_empty());
        assert!(!release().is_empty());
    }

    #[test_log::test]
    fn test_snapshot_is_serializable() {
        let snapshot = snapshot();
        let json = serde_json::to_string(&snapshot).expect("snapshot must serialize");
        assert!(json.contains("\"endianness\""));
        assert!(json.contains("\"uptime\""));
    }
}
