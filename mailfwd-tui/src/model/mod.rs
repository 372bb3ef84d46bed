//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!     app.rs          App 主状态，持有会话状态、表格、表单和后端服务
//!     state.rs        SessionState { List , Input{active} , Error{error , width} }
//!     table.rs        转发规则表格（行、光标、焦点）
//!     input.rs        单行文本输入框与两字段表单
//!     projection.rs   ForwardingRule → 表格行
//!
//! 只有 Update 层修改 Model，View 层只读。
//!

mod app;
mod input;
mod projection;
mod state;
mod table;

#[cfg(test)]
pub mod test_support;

pub use app::App;
pub use input::{InputForm, TextInput};
pub use projection::rows_from;
pub use state::SessionState;
pub use table::{ForwardRow, ForwardTable};
