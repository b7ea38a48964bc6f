//! 原生结果结构体的解码器
//!
//! 每个解码器都是 (返回码, 缓冲区, 指针宽度) 上的纯函数，
//! 不做任何原生调用，可以直接用合成缓冲区测试。
//! 注意：每组偏移只对编写时针对的 (平台, 指针宽度) 组合有效，
//! 用错组合得到的是垃圾值而不是可检测的错误。

pub mod memstatus;
pub mod sysinfo;
pub mod utsname;
