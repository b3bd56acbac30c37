//! 终端模式：进入 raw mode + 备用屏幕，退出（含 panic）时恢复
//!
//! 终止信号只转交主循环；主循环每 30ms 检查一次，随后正常走 Drop 恢复终端。

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

/// 进程内只有一个终端，恢复状态用全局标记，panic hook 与 Drop 共用
static ACTIVE: AtomicBool = AtomicBool::new(false);

pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            SetCursorStyle::BlinkingBar
        ) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        ACTIVE.store(true, Ordering::SeqCst);

        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = leave();
            previous(info);
        }));

        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = leave() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

/// 幂等：只有第一次调用真正恢复
fn leave() -> io::Result<()> {
    if !ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        SetCursorStyle::DefaultUserShape
    );
    raw.and(screen)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    #[cfg(unix)]
    fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        match signal {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }

    /// 按 shell 约定：128 + 信号编号
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

#[cfg(unix)]
pub fn install_termination_signals(
    tx: Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("zpad-signals".to_string())
        .spawn(move || {
            for signal in signals.forever().filter_map(TerminationSignal::from_raw) {
                if tx.send(signal).is_err() {
                    break;
                }
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
