//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并翻译成消息
//!         update::update(&mut app , msg)                  // 更新状态，可能同步调用远端
//!     }
//! }
//!
//! 远端调用期间不会读取新事件，按键会在调用结束后依次处理。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
