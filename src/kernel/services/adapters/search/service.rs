//! 编辑器内搜索服务
//!
//! 每个请求一个后台 worker（tokio blocking 池），结果经 channel 送回前台线程。

use crate::kernel::search::SearchSession;
use crate::kernel::services::ports::search::{Result as SearchResult, SearchMessage, SearchRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::SyncSender;
use std::sync::Arc;

pub struct SearchTask {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

impl SearchTask {
    fn new(id: u64) -> Self {
        Self {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn cancelled_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }
}

pub struct SearchService {
    runtime: tokio::runtime::Handle,
}

impl SearchService {
    pub fn new(runtime: tokio::runtime::Handle) -> Self {
        Self { runtime }
    }

    /// 异步构建搜索会话
    pub fn start(&self, request: SearchRequest, tx: SyncSender<SearchMessage>) -> SearchTask {
        let task = SearchTask::new(request.search_id);
        let search_id = request.search_id;
        let cancelled = task.cancelled_flag();

        tracing::debug!(
            search_id,
            query_len = request.query.len(),
            text_len = request.text.len(),
            use_regex = request.use_regex,
            "editor search started"
        );

        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                SearchSession::new(request.text, request.query, request.use_regex)
            })
            .await;

            let msg = if cancelled.load(Ordering::Relaxed) {
                SearchMessage::Cancelled { search_id }
            } else {
                match result {
                    Ok(result) => SearchMessage::Finished { search_id, result },
                    Err(e) => {
                        tracing::error!(search_id, error = %e, "search worker failed");
                        SearchMessage::Failed {
                            search_id,
                            message: format!("Search task failed: {}", e),
                        }
                    }
                }
            };
            let _ = tx.send(msg);
        });

        task
    }

    /// 同步搜索（测试或需要立即结果的场景）
    pub fn run_sync(request: &SearchRequest) -> SearchResult<SearchSession> {
        SearchSession::new(request.text.as_str(), request.query.as_str(), request.use_regex)
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/service.rs"]
mod tests;
