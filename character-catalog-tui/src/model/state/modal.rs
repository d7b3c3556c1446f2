//! 弹窗/对话框状态

use character_catalog_core::types::{Character, CharacterStatus};

/// 表单用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// 新建角色（仅本地）
    Create,
    /// 编辑指定 ID 的角色
    Edit(u32),
}

/// 角色编辑表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterForm {
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub image: String,
    /// 当前焦点字段
    pub focus: usize,
    /// 校验错误
    pub error: Option<String>,
}

impl CharacterForm {
    /// 字段数：名称、状态、种族、图片
    pub const FIELD_COUNT: usize = 4;
    /// 状态字段用 ←→ 切换，不接受字符输入
    pub const STATUS_FIELD: usize = 1;

    pub fn empty() -> Self {
        Self {
            name: String::new(),
            status: CharacterStatus::Alive,
            species: String::new(),
            image: String::new(),
            focus: 0,
            error: None,
        }
    }

    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            status: character.status,
            species: character.species.clone(),
            image: character.image.clone(),
            ..Self::empty()
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// 切换状态值（仅当焦点在状态字段时）
    pub fn cycle_status(&mut self, forward: bool) {
        if self.focus != Self::STATUS_FIELD {
            return;
        }
        let all = CharacterStatus::ALL;
        let index = all.iter().position(|s| *s == self.status).unwrap_or(0);
        let next = if forward {
            (index + 1) % all.len()
        } else {
            (index + all.len() - 1) % all.len()
        };
        self.status = all[next];
    }

    /// 当前焦点对应的文本字段
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.name),
            2 => Some(&mut self.species),
            3 => Some(&mut self.image),
            _ => None,
        }
    }

    pub fn input(&mut self, ch: char) {
        if let Some(field) = self.focused_text() {
            field.push(ch);
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text() {
            field.pop();
        }
    }

    /// 校验必填字段，失败时把错误写入表单
    pub fn validate(&mut self) -> bool {
        if self.name.trim().is_empty() {
            self.error = Some("Name is required".to_string());
            return false;
        }
        true
    }

    /// 生成角色记录；新建时 ID 由列表分配
    pub fn to_character(&self, id: u32) -> Character {
        Character {
            id,
            name: self.name.trim().to_string(),
            status: self.status,
            species: self.species.trim().to_string(),
            image: self.image.trim().to_string(),
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 角色详情
    Detail { id: u32 },

    /// 新建/编辑表单
    Form { mode: FormMode, form: CharacterForm },

    /// 确认删除
    ConfirmDelete {
        id: u32,
        name: String,
        /// 0 = 取消, 1 = 删除
        focus: usize,
        /// 取消后是否回到详情弹窗
        from_detail: bool,
    },

    /// 帮助
    Help,

    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_detail(&mut self, id: u32) {
        self.active = Some(Modal::Detail { id });
    }

    pub fn show_edit(&mut self, character: &Character) {
        self.active = Some(Modal::Form {
            mode: FormMode::Edit(character.id),
            form: CharacterForm::from_character(character),
        });
    }

    pub fn show_create(&mut self) {
        self.active = Some(Modal::Form {
            mode: FormMode::Create,
            form: CharacterForm::empty(),
        });
    }

    pub fn show_confirm_delete(&mut self, character: &Character, from_detail: bool) {
        self.active = Some(Modal::ConfirmDelete {
            id: character.id,
            name: character.name.clone(),
            focus: 0,
            from_detail,
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_cycle_wraps() {
        let mut form = CharacterForm::empty();
        form.prev_field();
        assert_eq!(form.focus, CharacterForm::FIELD_COUNT - 1);
        form.next_field();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_status_field_ignores_text_input() {
        let mut form = CharacterForm::empty();
        form.focus = CharacterForm::STATUS_FIELD;
        form.input('x');
        assert!(form.name.is_empty());

        form.cycle_status(true);
        assert_eq!(form.status, CharacterStatus::Dead);
        form.cycle_status(false);
        form.cycle_status(false);
        assert_eq!(form.status, CharacterStatus::Unknown);
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let mut form = CharacterForm::empty();
        form.input(' ');
        assert!(!form.validate());
        assert!(form.error.is_some());

        form.input('R');
        assert!(form.error.is_none());
        assert!(form.validate());
        assert_eq!(form.to_character(9).name, "R");
    }
}
