use scraper::ElementRef;

/// Collapses every run of whitespace into a single ASCII space and trims.
/// The result is stable under re-application.
pub fn collapse_whitespace(s: &str) -> String {
    regex!(r"\s+").replace_all(s.trim(), " ").into_owned()
}

/// Concatenated text of all descendant text nodes, whitespace-collapsed.
pub fn collapsed_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}
