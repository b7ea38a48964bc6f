use serde::Serialize;

/// 解码器使用的指针宽度
///
/// 原生结构体中 `long` 类型字段的偏移依赖指针宽度，
/// 解码器把它作为显式参数接收，而不是在各处散落 `size_of` 运算。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PointerWidth {
    Four,
    Eight,
}

impl PointerWidth {
    /// 宽度对应的字节数
    pub const fn bytes(self) -> usize {
        match self {
            PointerWidth::Four => 4,
            PointerWidth::Eight => 8,
        }
    }

    /// 当前进程的原生指针宽度
    pub fn native() -> Self {
        if std::mem::size_of::<usize>() == 8 {
            PointerWidth::Eight
        } else {
            PointerWidth::Four
        }
    }
}

/// sysinfo(2) 结果的安全包装
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct SysInfoResult {
    pub uptime: i64,
    pub totalram: u64,
    pub freeram: u64,
}

/// GlobalMemoryStatusEx 结果的安全包装
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct MemoryStatus {
    pub total_phys: u64,
    pub avail_phys: u64,
}

/// 错误类型
///
/// 只在外部调用层和分发层之间流转；分发层把每个错误
/// 转换成中性默认值，公共 API 永远不会抛出错误。
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Native call failed: {0}")]
    NativeCall(#[from] std::io::Error),
    #[error("Not supported on this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, SystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_width_bytes() {
        assert_eq!(PointerWidth::Four.bytes(), 4);
        assert_eq!(PointerWidth::Eight.bytes(), 8);
    }

    #[test]
    fn test_native_pointer_width() {
        // 与编译目标的指针大小一致
        let expected = if std::mem::size_of::<usize>() == 8 {
            PointerWidth::Eight
        } else {
            PointerWidth::Four
        };
        assert_eq!(PointerWidth::native(), expected);
    }
}
