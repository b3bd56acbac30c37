//! 前台主循环：输入 → Store → 副作用；后台搜索结果经 channel 回到这里

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;

use super::terminal_guard::TerminationSignal;
use super::view;
use crate::core::event::{typed_char, InputEvent, Key};
use crate::kernel::services::adapters::{FileService, KeybindingService, SearchService, SearchTask};
use crate::kernel::services::ports::SearchMessage;
use crate::kernel::{Action, AppState, Effect, Store};

const POLL_INTERVAL: Duration = Duration::from_millis(30);
const SEARCH_CHANNEL_CAPACITY: usize = 16;
const MAX_SEARCH_DRAIN_PER_TICK: usize = 32;

pub struct App {
    store: Store,
    keybindings: KeybindingService,
    search: SearchService,
    files: FileService,
    search_tx: SyncSender<SearchMessage>,
    search_rx: Receiver<SearchMessage>,
    search_task: Option<SearchTask>,
}

impl App {
    pub fn new(
        state: AppState,
        keybindings: KeybindingService,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let (search_tx, search_rx) = mpsc::sync_channel(SEARCH_CHANNEL_CAPACITY);
        Self {
            store: Store::new(state),
            keybindings,
            search: SearchService::new(runtime),
            files: FileService::new(),
            search_tx,
            search_rx,
            search_task: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().should_quit
    }

    pub fn is_searching(&self) -> bool {
        self.search_task.is_some()
    }

    /// 返回是否需要重绘
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key_event) => {
                let key = Key::from(key_event);
                let context = self.store.state().keybinding_context();
                if let Some(command) = self.keybindings.resolve(context, &key).cloned() {
                    tracing::trace!(command = command.name(), "key resolved");
                    return self.dispatch(Action::RunCommand(command));
                }
                match typed_char(&key_event) {
                    Some(ch) => self.dispatch(Action::InsertChar(ch)),
                    None => false,
                }
            }
            InputEvent::Paste(text) => self.dispatch(Action::Paste(text)),
            InputEvent::Resize(..) => true,
        }
    }

    /// 打开文件（命令行参数），与 Open 提示框走同一条加载路径
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        match self.run_effect(Effect::LoadFile(path)) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// 派发动作并执行其副作用；副作用产生的后续动作依次入队
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut pending = VecDeque::from([action]);
        let mut changed = false;

        while let Some(action) = pending.pop_front() {
            let result = self.store.dispatch(action);
            changed |= result.state_changed;
            for effect in result.effects {
                if let Some(follow_up) = self.run_effect(effect) {
                    pending.push_back(follow_up);
                }
            }
        }

        changed
    }

    fn run_effect(&mut self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::StartSearch(request) => {
                if let Some(task) = self.search_task.take() {
                    task.cancel();
                }
                self.search_task = Some(self.search.start(request, self.search_tx.clone()));
                None
            }
            Effect::LoadFile(path) => Some(match self.files.open_document(&path) {
                Ok(content) => Action::FileLoaded { path, content },
                Err(e) => Action::FileFailed {
                    path,
                    message: e.to_string(),
                },
            }),
            Effect::WriteFile { path, content } => {
                Some(match self.files.save_document(&path, &content) {
                    Ok(()) => Action::FileSaved { path },
                    Err(e) => Action::FileFailed {
                        path,
                        message: e.to_string(),
                    },
                })
            }
        }
    }

    /// 取回后台搜索结果（非阻塞）
    pub fn poll_search(&mut self) -> bool {
        let mut changed = false;

        for _ in 0..MAX_SEARCH_DRAIN_PER_TICK {
            let msg = match self.search_rx.try_recv() {
                Ok(msg) => msg,
                Err(_) => break,
            };
            changed |= self.accept_search_message(msg);
        }

        changed
    }

    fn accept_search_message(&mut self, msg: SearchMessage) -> bool {
        if self
            .search_task
            .as_ref()
            .is_some_and(|task| task.id() == msg.search_id())
        {
            self.search_task = None;
        }
        self.dispatch(Action::Search(msg))
    }

    /// 阻塞等待当前搜索结束（测试与无界面场景）
    pub fn wait_for_search(&mut self, timeout: Duration) -> bool {
        let deadline = std::time::Instant::now() + timeout;
        let mut changed = false;
        while self.search_task.is_some() {
            let now = std::time::Instant::now();
            if now >= deadline {
                break;
            }
            match self.search_rx.recv_timeout(deadline - now) {
                Ok(msg) => changed |= self.accept_search_message(msg),
                Err(_) => break,
            }
        }
        changed
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        signals: &Receiver<TerminationSignal>,
    ) -> io::Result<Option<TerminationSignal>> {
        let mut dirty = true;
        let mut received = None;

        while !self.should_quit() {
            if let Ok(signal) = signals.try_recv() {
                tracing::info!(?signal, "termination signal received");
                received = Some(signal);
                break;
            }

            dirty |= self.poll_search();

            if dirty {
                let mut editor_height = 0;
                let state = self.store.state();
                terminal.draw(|frame| editor_height = view::render(frame, state))?;
                // 首帧或窗口尺寸变化后，按实际编辑区高度重新滚动
                dirty = self.dispatch(Action::SetViewHeight(editor_height));
            }

            if crossterm::event::poll(POLL_INTERVAL)? {
                let event = crossterm::event::read()?;
                if let Some(input) = InputEvent::from_crossterm(event) {
                    dirty |= self.handle_input(input);
                }
            }
        }

        if let Some(task) = self.search_task.take() {
            task.cancel();
        }
        Ok(received)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/app.rs"]
mod tests;
