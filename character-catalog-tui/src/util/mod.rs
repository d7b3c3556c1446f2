//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     mod terminal;       // 终端初始化和恢复
//!     mod logging;        // 文件日志（stdout 属于 TUI，日志只能写文件）
//!
//! 使用方式（src/main.rs）：
//!
//!     let _guard = init_logging()?;           // 1. 日志
//!     let mut terminal = init_terminal()?;    // 2. 终端
//!     let result = app::run(...);             // 3. 主循环
//!     restore_terminal(&mut terminal)?;       // 4. 无论成功失败都恢复终端
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
