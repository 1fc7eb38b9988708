use std::env;

const COLOR_SCHEME_ENV_VAR: &str = "FOLIO_COLOR_SCHEME";
const GTK_THEME_ENV_VAR: &str = "GTK_THEME";

/// Whether the host asks for a dark appearance. Sampled once at startup.
pub fn prefers_dark() -> bool {
    let scheme = env::var(COLOR_SCHEME_ENV_VAR).ok();
    let gtk_theme = env::var(GTK_THEME_ENV_VAR).ok();
    parse(scheme.as_deref(), gtk_theme.as_deref())
}

fn parse(scheme: Option<&str>, gtk_theme: Option<&str>) -> bool {
    match scheme.map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("dark") => true,
        Some(s) if s.eq_ignore_ascii_case("light") => false,
        _ => gtk_theme
            .map(|theme| theme.to_ascii_lowercase().ends_with(":dark"))
            .unwrap_or(false),
    }
}
