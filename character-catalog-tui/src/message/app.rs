//! 应用主消息枚举

use super::{ContentMessage, ModalMessage};
use crate::backend::PageCompletion;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点（列表 ↔ 搜索框）
    ToggleFocus,

    /// 列表页相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台加载完成
    PageLoaded(PageCompletion),

    /// 返回/关闭
    GoBack,

    /// 从第一页重新加载
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换深色/浅色主题
    ToggleTheme,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
