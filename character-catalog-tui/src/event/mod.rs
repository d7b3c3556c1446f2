//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message：
//!     · poll_event      事件轮询，受 src/app.rs 调用，最长等待 timeout
//!     · handle_event    事件分发
//!         - 有弹窗打开时，交给 handle_modal_keys
//!         - 全局快捷键就地处理
//!         - 焦点在搜索框时，字符进入搜索词
//!         - 焦点在列表时，交给 handle_list_keys
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
