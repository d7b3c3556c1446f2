//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Event 与 Update 之间的桥梁：按键被翻译成 Message，
//! 后台加载的结果也以 Message 的形式回到 Update 层。
//!
//!     mod app;            // AppMessage 主消息
//!     mod content;        // 列表页子消息
//!     mod modal;          // 弹窗子消息
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
