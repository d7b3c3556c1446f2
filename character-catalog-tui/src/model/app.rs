//! 应用主状态结构

use character_catalog_core::types::Character;
use character_catalog_core::{CharacterCollection, CollectionEdit, CoreResult};

use super::{CharactersState, FocusPanel, ModalState};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 角色列表本体（唯一所有者）
    pub collection: CharacterCollection,

    /// 列表页面状态
    pub characters: CharactersState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置
    pub config: AppConfig,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 交给主循环执行的副作用 ===
    /// 请求加载下一页
    pub load_requested: bool,
    /// 请求从第一页重新加载
    pub reload_requested: bool,
    /// 配置已修改，需要保存
    pub config_dirty: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::List,
            collection: CharacterCollection::new(),
            characters: CharactersState::new(),
            modal: ModalState::new(),
            config,
            status_message: None,
            load_requested: false,
            reload_requested: false,
            config_dirty: false,
        }
    }

    /// 对列表本体应用一次修改，并刷新视图
    pub fn apply_edit(&mut self, edit: CollectionEdit) -> CoreResult<u32> {
        let result = self.collection.apply(edit);
        if let Err(ref e) = result {
            if e.is_expected() {
                log::info!("Edit not applied: {e}");
            } else {
                log::warn!("Edit not applied: {e}");
            }
        }
        self.refresh_view();
        result
    }

    /// 整体替换列表本体
    pub fn set_characters(&mut self, characters: Vec<Character>) {
        self.collection.replace(characters);
        self.refresh_view();
    }

    /// 清空列表，准备从第一页重新加载
    pub fn reset_list(&mut self) {
        self.set_characters(Vec::new());
        self.characters.selection.reset();
        self.characters.selected = 0;
        self.characters.error = None;
    }

    /// 重新派生视图
    pub fn refresh_view(&mut self) {
        self.characters.refresh_view(&self.collection);
    }

    /// 高亮行接近末尾时请求下一页
    pub fn check_prefetch(&mut self) {
        if self.characters.near_end(self.config.prefetch_threshold) {
            self.load_requested = true;
        }
    }

    /// 取出加载请求
    pub fn take_load_request(&mut self) -> bool {
        std::mem::take(&mut self.load_requested)
    }

    /// 取出重新加载请求
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// 取出配置保存请求
    pub fn take_config_dirty(&mut self) -> bool {
        std::mem::take(&mut self.config_dirty)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
