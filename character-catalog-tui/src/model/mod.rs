//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! 所有状态变更都通过 Update 层触发。
//!
//!     mod app;            // 主应用状态（持有角色列表本体）
//!     mod focus;          // 焦点状态（List / Search）
//!     pub mod state;      // 列表页状态与弹窗状态
//!
//! 角色列表 `CharacterCollection` 只有 App 一个所有者；
//! 列表页只保存由它派生出的视图（过滤 + 排序）与选中状态，
//! 所有修改都以 `CollectionEdit` 的形式回到 App。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{CharacterForm, CharactersState, FormMode, Modal, ModalState};
