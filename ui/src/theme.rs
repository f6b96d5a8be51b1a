//! Colour palette and the stylesheet built from it.

pub const PRIMARY: &str = "#0EA5E9";
pub const PRIMARY_DARK: &str = "#0369A1";
pub const ERROR: &str = "#EF4444";
pub const ERROR_SURFACE: &str = "#FEF2F2";
pub const ERROR_BORDER: &str = "#FECACA";
pub const WARNING: &str = "#F59E0B";
pub const TEXT: &str = "#1F2937";
pub const TEXT_MUTED: &str = "#6B7280";
pub const SURFACE: &str = "#FFFFFF";
pub const BACKGROUND: &str = "#F3F4F6";
pub const BORDER: &str = "#E5E7EB";
pub const BADGE_SURFACE: &str = "#E0F2FE";

/// Returns the app-wide CSS with the palette substituted in.
pub fn stylesheet() -> String {
    format!(
        r#"
    /* --- RESET --- */
    * {{ box-sizing: border-box; }}

    html, body {{
        margin: 0;
        padding: 0;
        min-height: 100%;
        font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
        color: {TEXT};
        background-color: {BACKGROUND};
    }}

    /* --- APP FRAME --- */
    main.container {{
        max-width: 480px;
        margin: 0 auto;
        padding: 1.5rem 1rem 2rem;
    }}

    article.card {{
        background-color: {SURFACE};
        border: 1px solid {BORDER};
        border-radius: 12px;
        padding: 1rem;
        margin-bottom: 1rem;
    }}

    article.card h3 {{
        margin: 0 0 0.75rem;
        font-size: 1rem;
    }}

    /* --- BUTTONS --- */
    button {{
        width: 100%;
        padding: 0.85rem 1rem;
        border-radius: 10px;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
    }}

    button.primary {{
        color: {SURFACE};
        background-color: {PRIMARY};
        border: 1px solid {PRIMARY};
    }}

    button.primary:active {{ background-color: {PRIMARY_DARK}; }}

    button.secondary {{
        color: {PRIMARY};
        background-color: {SURFACE};
        border: 1px solid {PRIMARY};
    }}

    /* --- PAYMENT FAILED --- */
    .payment-failed-header {{ text-align: center; margin-bottom: 1.5rem; }}
    .payment-failed-icon {{ color: {ERROR}; display: flex; justify-content: center; margin-bottom: 0.75rem; }}
    .payment-failed-title {{ margin: 0 0 0.5rem; font-size: 1.5rem; color: {ERROR}; }}
    .payment-failed-subtitle {{ margin: 0; color: {TEXT_MUTED}; }}

    .payment-error-block {{
        display: flex;
        gap: 0.75rem;
        background-color: {ERROR_SURFACE};
        border: 1px solid {ERROR_BORDER};
        border-radius: 12px;
        padding: 1rem;
        margin-bottom: 1rem;
        color: {ERROR};
    }}
    .payment-error-label {{ margin: 0 0 0.25rem; font-weight: 600; }}
    .payment-error-message {{ margin: 0; color: {TEXT}; word-break: break-word; }}

    .detail-row {{ display: flex; justify-content: space-between; gap: 1rem; padding: 0.35rem 0; }}
    .detail-label {{ color: {TEXT_MUTED}; }}
    .detail-value {{ font-weight: 600; text-align: right; }}
    .badge {{
        padding: 0.15rem 0.6rem;
        border-radius: 999px;
        color: {PRIMARY_DARK};
        background-color: {BADGE_SURFACE};
        font-family: monospace;
    }}

    .failure-reasons {{ margin: 0; padding-left: 1.25rem; }}
    .failure-reason {{ padding: 0.2rem 0; color: {TEXT_MUTED}; }}

    .support-contact {{ display: flex; align-items: center; gap: 0.75rem; }}
    .support-hotline {{ color: {PRIMARY}; font-weight: 700; text-decoration: none; }}

    .payment-failed-actions {{ display: flex; flex-direction: column; gap: 0.75rem; }}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_substitutes_palette() {
        let css = stylesheet();
        assert!(css.contains(ERROR));
        assert!(css.contains(PRIMARY));
        assert!(!css.contains("{ERROR}"));
    }
}
