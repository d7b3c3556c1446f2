//! 页面状态模块

mod characters;
mod modal;

pub use characters::CharactersState;
pub use modal::{CharacterForm, FormMode, Modal, ModalState};
