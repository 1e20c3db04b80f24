//! `experience-item`: work history with formatted responsibilities.

use super::fields::{escaped, invalid, item_mapping, items, no_items, section, text};
use super::{RenderContext, RenderError};
use serde_yaml::{Mapping, Value};
use vitae_parser::vitae::{escape_html, scalar_to_string};

pub(crate) fn render(content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let Some(items) = items(content) else {
        return Ok(no_items(ctx));
    };

    let mut body = String::new();
    for (index, item) in items.iter().enumerate() {
        let item = item_mapping(index, item)?;
        let company = text(item, "company")?
            .map(|company| format!("<span class=\"company\"> || {}</span>", escape_html(&company)))
            .unwrap_or_default();

        body.push_str("<div class=\"experience-item\">\n<div class=\"experience-header\">\n");
        body.push_str(&format!(
            "<div><span class=\"job-title\">{}</span>{}</div>\n",
            escaped(item, "title")?,
            company
        ));
        body.push_str(&format!(
            "<div class=\"duration\">{}</div>\n</div>\n",
            escaped(item, "duration")?
        ));

        let responsibilities = responsibilities(item)?;
        if !responsibilities.is_empty() {
            body.push_str("<ul class=\"responsibilities\">\n");
            for line in responsibilities {
                body.push_str(&format!("<li>{}</li>\n", ctx.format(&line)));
            }
            body.push_str("</ul>\n");
        }
        body.push_str("</div>\n");
    }
    Ok(section(ctx, &body))
}

/// A list of lines, or a single string as one line.
fn responsibilities(item: &Mapping) -> Result<Vec<String>, RenderError> {
    const FIELD: &str = "responsibilities";
    match item.get(FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(lines)) => lines
            .iter()
            .filter(|line| !line.is_null())
            .map(|line| scalar_to_string(line).ok_or_else(|| invalid(FIELD, "a list of text", line)))
            .collect(),
        Some(value @ Value::Mapping(_)) => Err(invalid(FIELD, "a list", value)),
        Some(other) => Ok(scalar_to_string(other)
            .filter(|line| !line.is_empty())
            .into_iter()
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use crate::templates::test_support::render;
    use crate::templates::{RenderError, SectionKind};

    #[test]
    fn renders_experience() {
        let html = render(
            SectionKind::Work,
            "Experience",
            "items:\n  - title: Engineer\n    company: Acme & Co\n    duration: 2020 - now\n    responsibilities:\n      - '**Led** the team'\n      - Wrote `code`\n",
        )
        .unwrap();
        insta::assert_snapshot!(html, @r#"
        <div class="section">
        <h2 class="section-title">Experience</h2>
        <div class="experience-item">
        <div class="experience-header">
        <div><span class="job-title">Engineer</span><span class="company"> || Acme &amp; Co</span></div>
        <div class="duration">2020 - now</div>
        </div>
        <ul class="responsibilities">
        <li><b>Led</b> the team</li>
        <li>Wrote <code class="monospace">code</code></li>
        </ul>
        </div>
        </div>
        "#);
    }

    #[test]
    fn empty_responsibilities_are_omitted() {
        let html = render(
            SectionKind::Work,
            "Experience",
            "items:\n  - title: Engineer\n    responsibilities: []\n",
        )
        .unwrap();
        assert!(!html.contains("<ul"));
        assert!(!html.contains("company"));
    }

    #[test]
    fn single_string_responsibility_is_one_line() {
        let html = render(
            SectionKind::Work,
            "Experience",
            "items:\n  - title: Engineer\n    responsibilities: Everything\n",
        )
        .unwrap();
        assert!(html.contains("<li>Everything</li>"));
    }

    #[test]
    fn mapping_responsibilities_are_an_error() {
        let err = render(
            SectionKind::Work,
            "Experience",
            "items:\n  - title: Engineer\n    responsibilities: {a: b}\n",
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::InvalidField { ref field, .. } if field == "responsibilities"));
    }
}
