use libc::c_int;

use crate::ffi::buffer::RawBuffer;
use crate::ffi::types::{PointerWidth, SysInfoResult};

/// 解释 sysinfo(2) 填充的缓冲区
///
/// 布局来自 linux 的 `struct sysinfo`：uptime 是偏移 0 处的有符号字，
/// 之后是三个 long 的负载数组，totalram / freeram 分别位于
/// 指针宽度 × 4 和指针宽度 × 5 处。
/// 这里假设 long 与指针同宽，常见 ABI 上成立，但并无普遍保证。
///
/// # 参数
///
/// * `rc` - 原生调用的返回码，0 表示成功
/// * `buf` - 被 sysinfo 填充的缓冲区
/// * `width` - 目标 ABI 的指针宽度
///
/// # 返回值
///
/// 调用失败时返回 `None`，三个字段全部视为未解析。
pub fn decode<const N: usize>(
    rc: c_int,
    buf: &RawBuffer<N>,
    width: PointerWidth,
) -> Option<SysInfoResult> {
    if rc != 0 {
        return None;
    }

    let word = width.bytes();
    Some(SysInfoResult {
        uptime: buf.read_iword(0, width),
        totalram: buf.read_word(word * 4, width),
        freeram: buf.read_word(word * 5, width),
    })
}
