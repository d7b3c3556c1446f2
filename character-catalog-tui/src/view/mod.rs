//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!     mod layout;         // 主布局：标题栏 + 搜索栏 + 列表 + 状态栏
//!     mod components;     // 状态栏、弹窗
//!     mod pages;          // 角色列表
//!     pub mod theme;      // 主题颜色
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
