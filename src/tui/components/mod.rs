mod completion_popup;
mod confirm_dialog;
mod editor_view;
mod response_panel;
mod status_bar;
mod tab_bar;

pub use completion_popup::CompletionPopupWidget;
pub use confirm_dialog::ConfirmDialogWidget;
pub use editor_view::{GutterWidget, TextSurfaceWidget};
pub use response_panel::ResponsePanelWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::{hit_test, tab_label, TabBarWidget};
