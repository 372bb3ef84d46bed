//! 输入表单更新

use crate::message::InputMessage;
use crate::model::{App, InputForm, SessionState};

pub fn update(app: &mut App, active: usize, msg: InputMessage) {
    match msg {
        InputMessage::NextField => {
            app.state = SessionState::Input {
                active: (active + 1) % InputForm::FIELD_COUNT,
            };
        }
        InputMessage::Confirm => confirm(app),
        InputMessage::Cancel => app.state = SessionState::List,
        edit => {
            let field = app.form.field_mut(active);
            match edit {
                InputMessage::Insert(c) => field.insert(c),
                InputMessage::Backspace => field.backspace(),
                InputMessage::Delete => field.delete(),
                InputMessage::Left => field.move_left(),
                InputMessage::Right => field.move_right(),
                InputMessage::Home => field.move_home(),
                InputMessage::End => field.move_end(),
                InputMessage::NextField | InputMessage::Confirm | InputMessage::Cancel => {}
            }
        }
    }
}

/// 提交表单：创建后刷新列表，成功才清空表单并返回列表
fn confirm(app: &mut App) {
    let local_part = app.form.local_part().value().trim().to_string();
    let destination = app.form.destination().value().trim().to_string();

    if let Err(e) = app.backend.create(&local_part, &destination) {
        return app.fail(e);
    }
    log::info!("Created forwarding rule {local_part}@{} -> {destination}", app.backend.domain());

    match app.backend.list() {
        Ok(rules) => {
            app.show_rules(&rules);
            let default_email = app.default_email().to_string();
            app.form.reset(&default_email);
            app.state = SessionState::List;
        }
        Err(e) => app.fail(e),
    }
}

/// 当前输入框获得焦点样式和光标，另一个恢复普通样式
pub fn apply_focus(app: &mut App, active: usize) {
    let focused = app.theme.focused_input();
    let blurred = app.theme.blurred_input();
    for (index, field) in app.form.fields_mut() {
        if index == active {
            field.focus();
            field.set_style(focused);
        } else {
            field.blur();
            field.set_style(blurred);
        }
    }
}
