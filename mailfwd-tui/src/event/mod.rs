//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/窗口事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     handle_event 接收以下 Event 类型：
//!         Event::Key(KeyEvent)                // 键盘事件，按当前会话状态分发
//!         Event::Resize(width , height)       // 终端窗口大小变化，任何状态下都转发
//!         其他                                 // 忽略
//!
//!     键盘事件的判断顺序：
//!         - 只处理 Press，忽略 Release / Repeat
//!         - 全局快捷键 Ctrl+C，任何状态下都退出
//!         - List 状态   → handle_list_keys()
//!         - Input 状态  → handle_input_keys()     `q` 在这里是普通字符
//!         - Error 状态  → handle_error_keys()     `q` 退出，其余任意键返回列表
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
