use libc::c_int;

use crate::ffi::buffer::RawBuffer;
use crate::ffi::types::MemoryStatus;

/// MEMORYSTATUSEX 要求的缓冲区大小，调用前必须写进结构体开头
pub const MEMORYSTATUSEX_LEN: u32 = 64;

/// 解释 GlobalMemoryStatusEx 填充的 64 字节缓冲区
///
/// 结构体开头是两个 32 位字段（dwLength、dwMemoryLoad），
/// 之后是一串 64 位字段：ullTotalPhys 在偏移 8，ullAvailPhys 在偏移 16。
/// 该 API 的返回码约定与 sysinfo 相反，非零才表示成功。
///
/// 调用前向首 4 字节写入结构体自身大小的前置条件由外部调用层负责，
/// 解码器只消费已填充的缓冲区。
pub fn decode<const N: usize>(rc: c_int, buf: &RawBuffer<N>) -> Option<MemoryStatus> {
    if rc == 0 {
        return None;
    }

    Some(MemoryStatus {
        total_phys: buf.read_u64(8),
        avail_phys: buf.read_u64(16),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let mut buf: RawBuffer<64> = RawBuffer::new();
        buf.write_u32(0, MEMORYSTATUSEX_LEN);
        buf.write_bytes(8, &8589934592u64.to_ne_bytes());
        buf.write_bytes(16, &4294967296u64.to_ne_bytes());

        let status = decode(1, &buf).unwrap();
        assert_eq!(
            status,
            MemoryStatus {
                total_phys: 8589934592,
                avail_phys: 4294967296,
            }
        );
    }

    #[test]
    fn test_decode_zero_return_is_unresolved() {
        let mut buf: RawBuffer<64> = RawBuffer::new();
        buf.write_bytes(8, &8589934592u64.to_ne_bytes());
        buf.write_bytes(16, &4294967296u64.to_ne_bytes());

        assert!(decode(0, &buf).is_none());
    }
}
