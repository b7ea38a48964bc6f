//! 原生调用的底层设施：编译期绑定、临时缓冲区和安全包装

pub mod bindings;
pub mod buffer;
pub mod safe_wrapper;
pub mod types;

pub use buffer::RawBuffer;
pub use safe_wrapper::SystemInterface;
pub use types::{MemoryStatus, PointerWidth, Result, SysInfoResult, SystemError};
