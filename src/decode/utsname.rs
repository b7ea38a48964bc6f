use libc::c_int;

use crate::ffi::buffer::RawBuffer;

/// utsname 中 nodename 字段可能出现的偏移
///
/// `struct utsname` 的字符数组宽度在不同 ABI 约定下不同
/// （9、33、65 或带扩展的 257 字节），这一层拿不到可靠的宽度信号，
/// 只能按固定顺序探测。候选表保持原样，不要试图归纳成公式。
const NODENAME_OFFSETS: [usize; 4] = [9, 33, 65, 257];

/// 从 uname(2) 填充的缓冲区里提取内核 release 字符串
///
/// 先探测 nodename 字段的实际位置：候选偏移中第一个确实存在
/// 非空 NUL 结尾字符串的就是赢家。release 字段随后在赢家偏移的
/// 两倍处读取。这个倍数关系是对两种具体 ABI 约定观察到的经验值，
/// 对其他宽度组合未经验证。
///
/// 调用失败或没有候选命中时返回空字符串。
pub fn release<const N: usize>(rc: c_int, buf: &RawBuffer<N>) -> String {
    if rc != 0 {
        return String::new();
    }

    let winner = NODENAME_OFFSETS
        .iter()
        .copied()
        .find(|&offset| buf.read_cstr(offset).is_some());

    match winner {
        Some(offset) => buf.read_cstr(offset * 2).unwrap_or_default(),
        None => String::new(),
    }
}
