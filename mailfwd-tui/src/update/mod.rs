//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod list;       // List 状态：新建 / 复制 / 删除 / 导航
//!         mod input;      // Input 状态：表单编辑与提交
//!         mod error;      // Error 状态：关闭错误页
//!
//!
//!     远端调用都在这里同步完成（ForwardService 内部 block_on），
//!     一条消息处理完之前不会读取下一个事件。
//!     任何远端失败都通过 App::fail 进入 Error 状态，表格保留上一次成功的内容。
//!
//!     处于 Input 状态时，每条消息处理完都会重新计算两个输入框的焦点样式。
//!

mod error;
mod input;
mod list;

use crate::message::AppMessage;
use crate::model::{App, SessionState};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Resize { width, height } => {
            app.resize(width, height);
        }

        AppMessage::List(list_msg) => {
            if app.state.is_list() {
                list::update(app, list_msg);
            }
        }

        AppMessage::Input(input_msg) => {
            if let SessionState::Input { active } = app.state {
                input::update(app, active, input_msg);
            }
        }

        AppMessage::DismissError => {
            error::dismiss(app);
        }

        AppMessage::Noop => {}
    }

    if let SessionState::Input { active } = app.state {
        input::apply_focus(app, active);
    }
}
