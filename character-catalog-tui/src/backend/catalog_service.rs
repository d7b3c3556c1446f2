//! 目录数据服务
//!
//! 列表页的数据源：持有分页加载器，负责首次加载，
//! 并把每次加载的结果通过 channel 交回主循环（UI 线程）。
//!
//! 加载在 tokio 运行时上执行，UI 线程从不阻塞等待网络。

use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use character_catalog_core::pagination::PaginationCursor;
use character_catalog_core::{LivenessToken, LoadOutcome, PageLoader};
use character_catalog_provider::{CatalogClient, CharacterSource};

use super::config_service::AppConfig;

/// 一次加载的完成结果
///
/// 携带发起加载时的存活令牌；令牌被撤销后该结果不应再合并。
#[derive(Debug, Clone)]
pub struct PageCompletion {
    pub liveness: LivenessToken,
    pub outcome: LoadOutcome,
}

/// 目录数据服务
pub struct CatalogService {
    runtime: Handle,
    source: Arc<dyn CharacterSource>,
    loader: Arc<PageLoader>,
    liveness: LivenessToken,
    sender: UnboundedSender<PageCompletion>,
    receiver: UnboundedReceiver<PageCompletion>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CharacterSource>, runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            runtime,
            loader: Arc::new(PageLoader::new(Arc::clone(&source))),
            source,
            liveness: LivenessToken::new(),
            sender,
            receiver,
        }
    }

    /// 根据配置创建 HTTP 数据源
    pub fn from_config(config: &AppConfig, runtime: Handle) -> Result<Self> {
        let client = CatalogClient::new(config.client_config())?;
        log::info!("Catalog source: {}", config.base_url);
        Ok(Self::new(Arc::new(client), runtime))
    }

    /// 首次加载
    pub fn start(&self) {
        self.load_more();
    }

    /// 请求下一页
    ///
    /// 已有加载进行中或已无更多数据时直接返回 false。
    pub fn load_more(&self) -> bool {
        let cursor = self.loader.cursor();
        if cursor.is_in_flight() || !cursor.has_more() {
            return false;
        }

        let loader = Arc::clone(&self.loader);
        let liveness = self.liveness.clone();
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let outcome = loader.load_more().await;
            if outcome == LoadOutcome::Skipped {
                return;
            }
            // 接收端已关闭说明 UI 已退出
            let _ = sender.send(PageCompletion { liveness, outcome });
        });

        true
    }

    /// 丢弃当前列表，从第一页重新加载
    ///
    /// 旧加载器上尚未完成的请求会在合并时被旧令牌拦下。
    pub fn reload(&mut self) {
        self.liveness.revoke();
        self.liveness = LivenessToken::new();
        self.loader = Arc::new(PageLoader::new(Arc::clone(&self.source)));
        self.start();
    }

    /// 当前分页游标快照
    pub fn cursor(&self) -> PaginationCursor {
        self.loader.cursor()
    }

    /// 取出一个已完成的加载结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<PageCompletion> {
        match self.receiver.try_recv() {
            Ok(completion) => Some(completion),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// 退出时调用：之后到达的结果一律丢弃
    pub fn shutdown(&self) {
        self.liveness.revoke();
    }

    #[cfg(test)]
    pub async fn next_completion(&mut self) -> Option<PageCompletion> {
        self.receiver.recv().await
    }
}
