use dioxus::document::eval;

/// Try the async clipboard API. Resolves to `false` when the webview has no
/// clipboard access or the write is rejected, so callers can fall back to a
/// manual copy.
pub async fn write_clipboard_text(text: &str) -> bool {
    let script = write_clipboard_text_script(text);
    eval(&script).join::<bool>().await.unwrap_or(false)
}

/// Select the contents of the fallback textarea so a manual copy is one keystroke.
pub async fn select_fallback_text(element_id: &str) {
    let script = format!(
        r#"
        const el = document.getElementById({id});
        if (el) {{ el.focus(); el.select(); }}
        "#,
        id = js_string_literal(element_id)
    );
    let _ = eval(&script).await;
}

fn write_clipboard_text_script(text: &str) -> String {
    let text_literal = js_string_literal(text);
    format!(
        r#"
        const text = {text_literal};
        try {{
            if (navigator.clipboard && navigator.clipboard.writeText) {{
                await navigator.clipboard.writeText(text);
                return true;
            }}
        }} catch (_) {{}}
        return false;
        "#
    )
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
