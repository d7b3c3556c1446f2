//! 列表页消息

/// 列表页消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    PageUp,
    PageDown,
    /// 打开详情
    Confirm,

    // ========== 增删改 ==========
    Add,
    Edit,
    Delete,

    // ========== 查询条件 ==========
    /// 切换状态过滤（All → Alive → Dead → unknown → All）
    CycleStatusFilter,
    /// 切换排序方向
    ToggleSort,
    /// 搜索框输入字符
    SearchInput(char),
    /// 搜索框删除字符
    SearchBackspace,
    /// 清空搜索
    ClearSearch,
}
