//! 列表状态更新

use anyhow::anyhow;

use crate::message::ListMessage;
use crate::model::{App, InputForm, SessionState};

pub fn update(app: &mut App, msg: ListMessage) {
    match msg {
        ListMessage::ToggleFocus => app.table.toggle_focus(),
        ListMessage::CreateRandom => create_random(app),
        ListMessage::Copy => copy_selected(app),
        ListMessage::Add => {
            let default_email = app.default_email().to_string();
            app.form.reset(&default_email);
            app.state = SessionState::Input {
                active: InputForm::LOCAL_PART,
            };
        }
        ListMessage::Delete => delete_selected(app),
        ListMessage::Navigate(nav) => app.table.navigate(nav),
    }
}

fn create_random(app: &mut App) {
    let result = app
        .backend
        .create_on_default_email()
        .and_then(|()| app.backend.list());
    match result {
        Ok(rules) => app.show_rules(&rules),
        Err(e) => app.fail(e),
    }
}

fn copy_selected(app: &mut App) {
    if let Some(row) = app.table.selected_row() {
        app.clipboard.write(&row.destination);
    }
}

/// 先重新拉取列表，再按源地址找到 ID 删除，从不按行号删除
fn delete_selected(app: &mut App) {
    let Some(source) = app.table.selected_row().map(|row| row.source.clone()) else {
        return;
    };

    let mut rules = match app.backend.list() {
        Ok(rules) => rules,
        Err(e) => return app.fail(e),
    };

    let Some(index) = rules.iter().position(|rule| rule.from == source) else {
        return app.fail(anyhow!(
            "entry {source} cannot be deleted: it no longer exists on the server"
        ));
    };

    if let Err(e) = app.backend.delete(&rules[index].id) {
        return app.fail(e);
    }

    log::info!("Deleted forwarding rule {source}");
    rules.remove(index);
    app.show_rules(&rules);
}
