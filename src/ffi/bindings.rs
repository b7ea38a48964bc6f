//! 按平台在编译期绑定的原生符号
//!
//! 每个声明的签名都对照平台文档的 ABI 固定下来，调用方无法自行
//! 构造签名。某个平台没有对应绑定时，`safe_wrapper` 中按 `cfg`
//! 选择的回退实现会直接报告不支持，而不会走到这里。

#[cfg(target_os = "linux")]
pub use self::linux::*;

#[cfg(target_os = "linux")]
mod linux {
    use libc::{c_char, c_double, c_int, c_void, size_t};

    extern "C" {
        /// int sysinfo(struct sysinfo *info);
        pub fn sysinfo(info: *mut c_void) -> c_int;

        /// int uname(struct utsname *buf);
        pub fn uname(buf: *mut c_void) -> c_int;

        /// int gethostname(char *name, size_t len);
        pub fn gethostname(name: *mut c_char, len: size_t) -> c_int;

        /// int getloadavg(double loadavg[], int nelem);
        pub fn getloadavg(loadavg: *mut c_double, nelem: c_int) -> c_int;
    }
}

#[cfg(windows)]
pub use self::windows::*;

#[cfg(windows)]
mod windows {
    use libc::{c_char, c_int, c_void};

    #[link(name = "kernel32")]
    extern "system" {
        /// BOOL GlobalMemoryStatusEx(LPMEMORYSTATUSEX lpBuffer);
        pub fn GlobalMemoryStatusEx(buffer: *mut c_void) -> c_int;

        /// ULONGLONG GetTickCount64(void);
        pub fn GetTickCount64() -> u64;
    }

    #[link(name = "ws2_32")]
    extern "system" {
        /// int gethostname(char *name, int namelen);
        pub fn gethostname(name: *mut c_char, namelen: c_int) -> c_int;
    }
}
