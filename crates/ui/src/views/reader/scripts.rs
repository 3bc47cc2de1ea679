use dioxus::document::eval;
use lesson_core::ScrollMetrics;

pub(super) fn scroll_metrics_script(container_id: &str) -> String {
    format!(
        r"const el = document.getElementById({container_id:?});
        if (!el) {{ return null; }}
        return {{
            scrollHeight: el.scrollHeight,
            scrollTop: el.scrollTop,
            clientHeight: el.clientHeight,
        }};"
    )
}

pub(super) fn scroll_into_view_script(anchor_id: &str) -> String {
    format!("document.getElementById({anchor_id:?})?.scrollIntoView({{behavior: 'smooth'}});")
}

/// `None` when the container is not mounted or the webview cannot answer.
pub(super) async fn read_scroll_metrics(container_id: &str) -> Option<ScrollMetrics> {
    let script = scroll_metrics_script(container_id);
    eval(&script)
        .join::<Option<ScrollMetrics>>()
        .await
        .ok()
        .flatten()
}

pub(super) async fn scroll_into_view(anchor_id: &str) {
    let script = scroll_into_view_script(anchor_id);
    let _ = eval(&script).await;
}
