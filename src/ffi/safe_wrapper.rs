#[cfg(any(target_os = "linux", windows))]
use std::io;

#[cfg(any(target_os = "linux", windows))]
use libc::c_char;
#[cfg(target_os = "linux")]
use libc::{c_double, size_t};

#[cfg(any(target_os = "linux", windows))]
use crate::decode;
#[cfg(any(target_os = "linux", windows))]
use crate::ffi::bindings;
#[cfg(any(target_os = "linux", windows))]
use crate::ffi::buffer::RawBuffer;
#[cfg(target_os = "linux")]
use crate::ffi::types::PointerWidth;
use crate::ffi::types::{MemoryStatus, Result, SysInfoResult, SystemError};

/// 提供对底层原生调用的安全访问
///
/// 每个方法对应固定集合中的一个原生调用：在栈上分配结果缓冲区，
/// 在调用线程上同步执行原生函数，再把返回码和缓冲区交给解码器。
/// 没有超时也没有取消，原生调用挂起则调用方挂起。
/// 当前平台没有对应绑定的方法返回 `SystemError::Unsupported`。
pub struct SystemInterface;

impl SystemInterface {
    /// 创建新的系统接口实例
    pub fn new() -> Self {
        Self
    }

    /// 安全地获取 sysinfo(2) 的结果
    ///
    /// # 错误
    ///
    /// 调用失败返回 `SystemError::NativeCall`，
    /// 非 linux 平台返回 `SystemError::Unsupported`
    #[cfg(target_os = "linux")]
    pub fn system_info(&self) -> Result<SysInfoResult> {
        // 128 字节对 struct sysinfo 留有富余
        let mut buf: RawBuffer<128> = RawBuffer::new();
        let rc = unsafe { bindings::sysinfo(buf.as_mut_ptr()) };

        decode::sysinfo::decode(rc, &buf, PointerWidth::native())
            .ok_or_else(|| SystemError::NativeCall(io::Error::last_os_error()))
    }

    #[cfg(not(target_os = "linux"))]
    pub fn system_info(&self) -> Result<SysInfoResult> {
        Err(SystemError::Unsupported)
    }

    /// 安全地获取 GlobalMemoryStatusEx 的结果
    #[cfg(windows)]
    pub fn memory_status(&self) -> Result<MemoryStatus> {
        let mut buf: RawBuffer<64> = RawBuffer::new();
        // API 前置条件：先把结构体自身大小写进首 4 字节
        buf.write_u32(0, decode::memstatus::MEMORYSTATUSEX_LEN);
        let rc = unsafe { bindings::GlobalMemoryStatusEx(buf.as_mut_ptr()) };

        decode::memstatus::decode(rc, &buf)
            .ok_or_else(|| SystemError::NativeCall(io::Error::last_os_error()))
    }

    #[cfg(not(windows))]
    pub fn memory_status(&self) -> Result<MemoryStatus> {
        Err(SystemError::Unsupported)
    }

    /// 安全地获取内核 release 字符串
    #[cfg(target_os = "linux")]
    pub fn kernel_release(&self) -> Result<String> {
        let mut buf: RawBuffer<512> = RawBuffer::new();
        let rc = unsafe { bindings::uname(buf.as_mut_ptr()) };
        if rc != 0 {
            return Err(SystemError::NativeCall(io::Error::last_os_error()));
        }

        Ok(decode::utsname::release(rc, &buf))
    }

    #[cfg(not(target_os = "linux"))]
    pub fn kernel_release(&self) -> Result<String> {
        Err(SystemError::Unsupported)
    }

    /// 安全地获取主机名
    #[cfg(target_os = "linux")]
    pub fn hostname(&self) -> Result<String> {
        const LIMIT: usize = 256;
        let mut buf: RawBuffer<LIMIT> = RawBuffer::new();
        let rc =
            unsafe { bindings::gethostname(buf.as_mut_ptr() as *mut c_char, LIMIT as size_t) };
        if rc != 0 {
            return Err(SystemError::NativeCall(io::Error::last_os_error()));
        }

        Ok(buf.read_cstr(0).unwrap_or_default())
    }

    #[cfg(windows)]
    pub fn hostname(&self) -> Result<String> {
        const LIMIT: usize = 16;
        let mut buf: RawBuffer<LIMIT> = RawBuffer::new();
        let rc = unsafe {
            bindings::gethostname(buf.as_mut_ptr() as *mut c_char, LIMIT as libc::c_int)
        };
        if rc != 0 {
            return Err(SystemError::NativeCall(io::Error::last_os_error()));
        }

        Ok(buf.read_cstr(0).unwrap_or_default())
    }

    #[cfg(not(any(target_os = "linux", windows)))]
    pub fn hostname(&self) -> Result<String> {
        Err(SystemError::Unsupported)
    }

    /// 安全地获取 1/5/15 分钟负载平均值
    #[cfg(target_os = "linux")]
    pub fn load_average(&self) -> Result<[f64; 3]> {
        let mut buf: RawBuffer<24> = RawBuffer::new();
        let rc = unsafe { bindings::getloadavg(buf.as_mut_ptr() as *mut c_double, 3) };
        // 必须恰好取到 3 个采样
        if rc != 3 {
            return Err(SystemError::NativeCall(io::Error::last_os_error()));
        }

        Ok([buf.read_f64(0), buf.read_f64(8), buf.read_f64(16)])
    }

    #[cfg(not(target_os = "linux"))]
    pub fn load_average(&self) -> Result<[f64; 3]> {
        Err(SystemError::Unsupported)
    }

    /// 安全地获取系统启动以来的毫秒数
    #[cfg(windows)]
    pub fn tick_count(&self) -> Result<u64> {
        // 该调用没有失败路径
        Ok(unsafe { bindings::GetTickCount64() })
    }

    #[cfg(not(windows))]
    pub fn tick_count(&self) -> Result<u64> {
        Err(SystemError::Unsupported)
    }
}

impl Default for SystemInterface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn test_system_info() {
        let iface = SystemInterface::new();
        let info = iface.system_info().expect("Failed to get system info");

        // 验证返回的信息是否合理
        assert!(info.uptime > 0);
        assert!(info.totalram > 0);
        assert!(info.totalram >= info.freeram);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_kernel_release() {
        let iface = SystemInterface::new();
        let release = iface.kernel_release().expect("Failed to get release");
        assert!(!release.is_empty());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_hostname() {
        let iface = SystemInterface::new();
        let hostname = iface.hostname().expect("Failed to get hostname");
        assert!(!hostname.is_empty());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_load_average() {
        let iface = SystemInterface::new();
        let loads = iface.load_average().expect("Failed to get loadavg");
        assert!(loads.iter().all(|&l| l >= 0.0));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_windows_calls_unsupported() {
        let iface = SystemInterface::new();
        assert!(matches!(
            iface.memory_status(),
            Err(SystemError::Unsupported)
        ));
        assert!(matches!(iface.tick_count(), Err(SystemError::Unsupported)));
    }
}
