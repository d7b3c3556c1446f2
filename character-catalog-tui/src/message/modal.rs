//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// ←：切换状态值 / 删除确认焦点
    Left,

    /// →：切换状态值 / 删除确认焦点
    Right,

    /// 确认/提交
    Confirm,

    /// 详情弹窗中进入编辑
    Edit,

    /// 详情弹窗中删除
    Delete,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
