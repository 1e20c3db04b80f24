//! `categorized-list`: nested categories, each `{_title, _items}`.

use super::fields::section;
use super::{RenderContext, RenderError};
use serde_yaml::Mapping;
use vitae_parser::vitae::{escape_html, is_falsy, normalize_items, scalar_to_string, DEFAULT_DELIMITER};

pub(crate) fn render(content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let mut body = String::new();
    for (key, category) in content {
        let Some(category) = category.as_mapping() else {
            log::debug!("section \"{}\": skipping non-category entry {:?}", ctx.key, key);
            continue;
        };
        let title = category
            .get("_title")
            .and_then(scalar_to_string)
            .filter(|title| !title.is_empty());
        let items = category.get("_items").filter(|items| !is_falsy(items));
        let (Some(title), Some(items)) = (title, items) else {
            continue;
        };
        body.push_str(&format!(
            "<div class=\"skills-category\"><strong>{}:</strong> <span class=\"skills-list\">{}</span></div>\n",
            escape_html(&title),
            ctx.format(&normalize_items(Some(items), DEFAULT_DELIMITER))
        ));
    }
    Ok(section(ctx, &body))
}

#[cfg(test)]
mod tests {
    use crate::templates::test_support::render;
    use crate::templates::SectionKind;

    #[test]
    fn renders_categories_in_order() {
        let html = render(
            SectionKind::Skills,
            "Skills",
            "languages:\n  _title: Languages\n  _items: [Rust, Go]\ntools:\n  _title: Tools\n  _items: Docker, **k8s**\n",
        )
        .unwrap();
        insta::assert_snapshot!(html, @r#"
        <div class="section">
        <h2 class="section-title">Skills</h2>
        <div class="skills-category"><strong>Languages:</strong> <span class="skills-list">Rust, Go</span></div>
        <div class="skills-category"><strong>Tools:</strong> <span class="skills-list">Docker, <b>k8s</b></span></div>
        </div>
        "#);
    }

    #[test]
    fn skips_incomplete_categories() {
        let html = render(
            SectionKind::Skills,
            "Skills",
            "a:\n  _title: No items\nb:\n  _items: [x]\nc: plain string\nd:\n  _title: Kept\n  _items: [y]\n",
        )
        .unwrap();
        assert_eq!(html.matches("skills-category").count(), 1);
        assert!(html.contains("Kept"));
    }
}
