use ratatui::widgets::Widget;
use ratatui::Frame;

use super::app::AppState;
use super::components::{
    CompletionPopupWidget, ConfirmDialogWidget, GutterWidget, ResponsePanelWidget,
    StatusBarWidget, TabBarWidget, TextSurfaceWidget,
};

pub fn render(frame: &mut Frame, app: &AppState) {
    let layout = app.layout;
    let area = frame.area();
    let buf = frame.buffer_mut();

    TabBarWidget::new(app).render(layout.tab_bar, buf);
    GutterWidget::new(app).render(layout.gutter, buf);
    TextSurfaceWidget::new(app).render(layout.text, buf);
    ResponsePanelWidget::new(app).render(layout.panel, buf);
    StatusBarWidget::new(app).render(layout.status, buf);

    // Overlays last so they draw over the editor.
    CompletionPopupWidget::new(app).render(area, buf);
    ConfirmDialogWidget::new(app).render(area, buf);
}
