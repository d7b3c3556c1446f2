//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 角色列表
    #[default]
    List,
    /// 搜索框
    Search,
}

impl FocusPanel {
    /// 切换焦点
    pub fn toggle(self) -> Self {
        match self {
            Self::List => Self::Search,
            Self::Search => Self::List,
        }
    }

    pub fn is_search(self) -> bool {
        self == Self::Search
    }
}
