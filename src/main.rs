use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use zpad::kernel::services::adapters::{ensure_settings_file, load_settings, KeybindingService};
use zpad::kernel::AppState;
use zpad::tui::{App, TerminalGuard};

mod logging;

fn main() -> io::Result<()> {
    let logging = logging::init();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = ?logging.as_ref().map(|guard| guard.log_dir()),
        "zpad starting"
    );

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create settings file");
    }
    let settings = load_settings().unwrap_or_default();

    let mut keybindings = KeybindingService::with_defaults();
    let applied = keybindings.apply_rules(&settings.keybindings);
    if applied > 0 {
        tracing::info!(applied, "keybinding overrides applied");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("zpad-worker")
        .enable_all()
        .build()?;

    let initial_path = std::env::args_os().nth(1).map(PathBuf::from);
    let mut app = App::new(AppState::new(&settings), keybindings, runtime.handle().clone());
    if let Some(path) = initial_path {
        app.open_path(path);
    }

    let guard = TerminalGuard::enter()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals = zpad::tui::terminal_guard::install_termination_signals(signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let result = app.run(&mut terminal, &signal_rx);

    drop(terminal);
    drop(guard);
    runtime.shutdown_background();
    tracing::info!("exit");
    drop(logging);

    // 终端已恢复，再按信号退出码结束进程
    if let Some(signal) = result? {
        std::process::exit(signal.exit_code());
    }
    Ok(())
}
