//! `custom`: free-form content shown as pretty JSON.

use super::fields::section;
use super::{RenderContext, RenderError};
use serde_yaml::{Mapping, Value};
use vitae_parser::vitae::escape_html;

pub(crate) fn render(content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let json = serde_json::to_string_pretty(&Value::Mapping(content.clone()))
        .map_err(|err| RenderError::Serialization(err.to_string()))?;
    Ok(section(
        ctx,
        &format!(
            "<div class=\"custom-section\"><pre>{}</pre></div>\n",
            escape_html(&json)
        ),
    ))
}

#[cfg(test)]
mod tests {
    use crate::templates::test_support::render;
    use crate::templates::SectionKind;

    #[test]
    fn renders_escaped_json() {
        let html = render(SectionKind::Custom, "Extra", "hobby: <chess>\n").unwrap();
        assert!(html.contains("<h2 class=\"section-title\">Extra</h2>"));
        assert!(html.contains(
            "<pre>{\n  &quot;hobby&quot;: &quot;&lt;chess&gt;&quot;\n}</pre>"
        ));
    }
}
