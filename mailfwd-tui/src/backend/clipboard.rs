//! 系统剪贴板

use std::io::{self, Write};
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

/// 剪贴板：只写，失败不向上报告
pub trait Clipboard {
    fn write(&self, text: &str);
}

/// 外部命令优先，全部不可用时回退到 OSC 52
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

const COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) {
        if let Some(cmd) = copy_with_command(text) {
            log::debug!("Copied {} bytes via {cmd}", text.len());
            return;
        }
        match copy_with_osc52(text) {
            Ok(()) => log::debug!("Copied {} bytes via OSC 52", text.len()),
            Err(e) => log::warn!("Clipboard write failed: {e}"),
        }
    }
}

fn copy_with_command(text: &str) -> Option<&'static str> {
    for (cmd, args) in COMMANDS {
        let Ok(mut child) = Command::new(cmd)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            continue;
        };
        if let Some(mut stdin) = child.stdin.take() {
            if stdin.write_all(text.as_bytes()).is_err() {
                let _ = child.wait();
                continue;
            }
        }
        if child.wait().is_ok_and(|s| s.success()) {
            return Some(cmd);
        }
    }
    None
}

/// 终端转义序列 `ESC ] 52 ; c ; <base64> BEL`
pub(crate) fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64_STANDARD.encode(text.as_bytes()))
}

fn copy_with_osc52(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()
}
