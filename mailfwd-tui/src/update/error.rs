//! 错误页

use crate::model::{App, SessionState};

/// 丢弃错误，返回列表
pub fn dismiss(app: &mut App) {
    if matches!(app.state, SessionState::Error { .. }) {
        app.state = SessionState::List;
    }
}
