use crate::help::HelpText;

/// Marker replaced by the captured help text, present exactly once in the
/// template.
pub const USAGE_PLACEHOLDER: &str = "%USAGE%";

/// The full README document for quip, fixed at build time apart from the
/// usage section.
pub const README_TEMPLATE: &str = include_str!("templates/README.md");

/// Render the README document with the given help text substituted into the
/// usage section.
///
/// The substitution is a single literal replacement, so the help text lands
/// in the document verbatim and no other characters are altered.
pub fn render(help: &HelpText) -> String {
    README_TEMPLATE.replacen(USAGE_PLACEHOLDER, help.as_str(), 1)
}
