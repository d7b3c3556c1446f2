//! 弹窗更新逻辑

use character_catalog_core::CollectionEdit;

use crate::message::ModalMessage;
use crate::model::{App, FormMode, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Detail { .. } => handle_detail(app, msg),
        Modal::Form { .. } => handle_form(app, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Help | Modal::Error { .. } => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
        }
    }
}

/// 处理详情弹窗
fn handle_detail(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Detail { id }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.characters.selection.close_detail();
            app.modal.close();
        }

        ModalMessage::Edit => {
            let Some(character) = app.collection.get(id).cloned() else {
                return;
            };
            if app.characters.selection.request_edit() {
                app.modal.show_edit(&character);
            }
        }

        ModalMessage::Delete => {
            if let Some(character) = app.collection.get(id).cloned() {
                app.modal.show_confirm_delete(&character, true);
            }
        }

        _ => {}
    }
}

/// 处理新建/编辑表单
fn handle_form(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Form { mode, ref mut form }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            match mode {
                FormMode::Create => app.characters.selection.cancel_create(),
                FormMode::Edit(_) => app.characters.selection.cancel_edit(),
            };
            app.modal.close();
        }

        ModalMessage::NextField => form.next_field(),
        ModalMessage::PrevField => form.prev_field(),
        ModalMessage::Left => form.cycle_status(false),
        ModalMessage::Right => form.cycle_status(true),
        ModalMessage::Input(ch) => form.input(ch),
        ModalMessage::Backspace => form.backspace(),

        ModalMessage::Confirm => {
            if !form.validate() {
                return;
            }
            let selection = &mut app.characters.selection;
            let edit = match mode {
                FormMode::Create => selection.save_create(form.to_character(0)),
                FormMode::Edit(id) => selection.save_edit(form.to_character(id)),
            };
            app.modal.close();

            if let Some(edit) = edit {
                apply_and_report(app, edit);
            }
        }

        ModalMessage::Edit | ModalMessage::Delete => {}
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        id,
        ref mut focus,
        from_detail,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Left | ModalMessage::Right | ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm if *focus == 1 => {
            let edit = app.characters.selection.confirm_delete(id);
            app.modal.close();
            apply_and_report(app, edit);
        }

        // 取消：回到打开删除前的状态
        ModalMessage::Close | ModalMessage::Confirm => {
            if from_detail {
                app.modal.show_detail(id);
            } else {
                app.modal.close();
            }
        }

        _ => {}
    }
}

/// 把修改交给列表本体，并在状态栏报告结果
fn apply_and_report(app: &mut App, edit: CollectionEdit) {
    let verb = match edit {
        CollectionEdit::Replace(_) => "Updated",
        CollectionEdit::Remove(_) => "Deleted",
        CollectionEdit::Insert(_) => "Created",
    };
    let name = match &edit {
        CollectionEdit::Replace(c) | CollectionEdit::Insert(c) => Some(c.name.clone()),
        CollectionEdit::Remove(id) => app.collection.get(*id).map(|c| c.name.clone()),
    };

    match app.apply_edit(edit) {
        Ok(id) => {
            app.characters.select_id(id);
            app.set_status(format!("{verb} \"{}\"", name.unwrap_or_default()));
        }
        Err(e) => {
            app.modal.show_error("Edit failed", e.to_string());
        }
    }
}
