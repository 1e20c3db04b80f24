//! `inline-summary`: one paragraph led by the section title.

use super::fields::formatted;
use super::{RenderContext, RenderError};
use serde_yaml::Mapping;

pub(crate) fn render(content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    Ok(format!(
        "<p class=\"summary-inline\"{}><strong>{}:</strong> {}</p>",
        ctx.style_attr(),
        ctx.title_html(),
        formatted(content, "content", ctx)?
    ))
}

#[cfg(test)]
mod tests {
    use crate::templates::test_support::render;
    use crate::templates::SectionKind;

    #[test]
    fn renders_formatted_summary() {
        let html = render(
            SectionKind::Summary,
            "Summary",
            "content: Builds **reliable** systems\n",
        )
        .unwrap();
        assert_eq!(
            html,
            "<p class=\"summary-inline\"><strong>Summary:</strong> Builds <b>reliable</b> systems</p>"
        );
    }

    #[test]
    fn missing_content_renders_empty() {
        let html = render(SectionKind::Summary, "About", "{}").unwrap();
        assert_eq!(
            html,
            "<p class=\"summary-inline\"><strong>About:</strong> </p>"
        );
    }
}
