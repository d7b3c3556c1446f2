//! 角色列表页面状态
//!
//! 只持有派生视图，不持有列表本体；本体在 [`App`](crate::model::App) 上。

use character_catalog_core::pagination::PaginationCursor;
use character_catalog_core::types::{Character, ViewQuery};
use character_catalog_core::{CharacterCollection, SelectionState, ViewCache};

/// 角色列表页面状态
#[derive(Debug)]
pub struct CharactersState {
    /// 搜索词、状态过滤、排序方向
    pub query: ViewQuery,
    /// 过滤 + 排序后的视图
    view: ViewCache,
    /// 视图中当前高亮的行
    pub selected: usize,
    /// 详情/编辑/新建弹窗的状态机
    pub selection: SelectionState,
    /// 分页游标快照（每帧从数据服务同步）
    pub cursor: PaginationCursor,
    /// 最近一次加载错误
    pub error: Option<String>,
}

impl Default for CharactersState {
    fn default() -> Self {
        Self::new()
    }
}

impl CharactersState {
    pub fn new() -> Self {
        Self {
            query: ViewQuery::default(),
            view: ViewCache::new(),
            selected: 0,
            selection: SelectionState::new(),
            cursor: PaginationCursor::new(),
            error: None,
        }
    }

    /// 重新派生视图（列表或查询未变时直接复用）
    pub fn refresh_view(&mut self, collection: &CharacterCollection) {
        let len = self.view.get(collection, &self.query).len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// 当前视图
    pub fn view(&self) -> &[Character] {
        self.view.last()
    }

    /// 获取当前高亮的角色
    pub fn selected_character(&self) -> Option<&Character> {
        self.view().get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        self.cursor.is_in_flight()
    }

    /// 高亮行是否进入预取范围
    ///
    /// 空视图本身就在末尾：首页加载失败或过滤后没有可见项时仍需继续请求。
    pub fn near_end(&self, threshold: usize) -> bool {
        let len = self.view().len();
        len == 0 || self.selected + threshold >= len - 1
    }

    // ========== 列表导航 ==========

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.view().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.view().len().saturating_sub(1);
    }

    /// 高亮指定 ID 的角色（不在视图中时不变）
    pub fn select_id(&mut self, id: u32) {
        if let Some(index) = self.view().iter().position(|c| c.id == id) {
            self.selected = index;
        }
    }

    pub fn page_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(rows);
    }

    pub fn page_down(&mut self, rows: usize) {
        let last = self.view().len().saturating_sub(1);
        self.selected = (self.selected + rows).min(last);
    }

    // ========== 查询条件 ==========
    // 查询变化后回到第一行

    pub fn push_search(&mut self, ch: char) {
        self.query.search.push(ch);
        self.selected = 0;
    }

    pub fn pop_search(&mut self) {
        self.query.search.pop();
        self.selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.query.search.clear();
        self.selected = 0;
    }

    pub fn cycle_status_filter(&mut self) {
        self.query.status = self.query.status.next();
        self.selected = 0;
    }

    pub fn toggle_sort(&mut self) {
        self.query.sort = self.query.sort.toggle();
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use character_catalog_core::types::{CharacterStatus, SortDirection, StatusFilter};

    use super::*;

    fn collection() -> CharacterCollection {
        let names = ["Rick Sanchez", "Morty Smith", "Summer Smith", "Beth Smith", "Jerry Smith"];
        CharacterCollection::from_vec(
            names
                .iter()
                .zip(1..)
                .map(|(name, id)| Character {
                    id,
                    name: (*name).to_string(),
                    status: if id == 5 { CharacterStatus::Dead } else { CharacterStatus::Alive },
                    species: "Human".to_string(),
                    image: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_view_is_sorted_ascending_by_default() {
        let mut state = CharactersState::new();
        state.refresh_view(&collection());

        let names: Vec<_> = state.view().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names[0], "Beth Smith");
        assert_eq!(names[4], "Summer Smith");
    }

    #[test]
    fn test_query_changes_reset_selection() {
        let collection = collection();
        let mut state = CharactersState::new();
        state.refresh_view(&collection);
        state.select_last();
        assert_eq!(state.selected, 4);

        for ch in "smith".chars() {
            state.push_search(ch);
        }
        state.refresh_view(&collection);
        assert_eq!(state.selected, 0);
        assert_eq!(state.view().len(), 4);

        state.cycle_status_filter();
        assert_eq!(state.query.status, StatusFilter::Only(CharacterStatus::Alive));
        state.refresh_view(&collection);
        assert_eq!(state.view().len(), 3);

        state.toggle_sort();
        assert_eq!(state.query.sort, SortDirection::Desc);
        state.refresh_view(&collection);
        assert_eq!(state.selected_character().unwrap().name, "Summer Smith");
    }

    #[test]
    fn test_selection_clamped_when_view_shrinks() {
        let mut collection = collection();
        let mut state = CharactersState::new();
        state.refresh_view(&collection);
        state.select_last();

        collection.replace(collection.as_slice()[..2].to_vec());
        state.refresh_view(&collection);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_near_end_threshold() {
        let mut state = CharactersState::new();
        assert!(state.near_end(0));

        state.refresh_view(&collection());
        assert!(state.near_end(5));
        assert!(!state.near_end(0));
        state.select_last();
        assert!(state.near_end(0));

        // 过滤后没有可见项
        for ch in "zzz".chars() {
            state.push_search(ch);
        }
        state.refresh_view(&collection());
        assert!(state.view().is_empty());
        assert!(state.near_end(0));
    }

    #[test]
    fn test_paging_stays_in_bounds() {
        let mut state = CharactersState::new();
        state.refresh_view(&collection());
        state.page_down(10);
        assert_eq!(state.selected, 4);
        state.page_up(2);
        assert_eq!(state.selected, 2);
        state.page_up(10);
        assert_eq!(state.selected, 0);
    }
}
