use std::sync::Arc;

use tera::Tera;
use verta_di::Build;
use verta_models::locale::Locale;
use verta_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};

#[derive(Debug, Clone, Build)]
pub struct TemplateServiceImpl {
    #[state]
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        tera.add_raw_template("base", BASE_TEMPLATE).unwrap();

        for &(name, locale, template) in TEMPLATES {
            tera.add_raw_template(&template_key(name, locale), template)
                .unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T, locale: Locale) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state
            .0
            .render(&template_key(T::NAME, locale), &context)
            .map_err(Into::into)
    }
}

fn template_key(name: &str, locale: Locale) -> String {
    format!("{name}.{locale}")
}

#[cfg(test)]
mod tests {
    use verta_templates_contracts::{InquiryHtmlTemplate, InquiryTextTemplate};

    use super::*;

    #[test]
    fn inquiry_html() {
        for locale in [Locale::En, Locale::El] {
            let result = render(inquiry_html_template(), locale);

            assert!(result.contains("Jane Doe"));
            assert!(result.contains("mailto:jane@example.com"));
            assert!(result.contains("Acme Inc"));
            assert!(result.contains("We need a new website."));
        }
    }

    #[test]
    fn inquiry_html_without_company() {
        let result = render(
            InquiryHtmlTemplate {
                company: None,
                ..inquiry_html_template()
            },
            Locale::En,
        );

        assert!(!result.contains("Company:"));
    }

    #[test]
    fn inquiry_html_message_line_breaks() {
        let result = render(
            InquiryHtmlTemplate {
                message: "first line\nsecond line".into(),
                ..inquiry_html_template()
            },
            Locale::En,
        );

        assert!(result.contains("first line<br>second line"));
    }

    #[test]
    fn inquiry_html_escapes_markup() {
        let result = render(
            InquiryHtmlTemplate {
                message: "<script>alert(1)</script>".into(),
                ..inquiry_html_template()
            },
            Locale::En,
        );

        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;script&gt;"));
    }

    #[test]
    fn inquiry_text() {
        for locale in [Locale::En, Locale::El] {
            let result = render(inquiry_text_template(), locale);

            assert!(result.contains("Jane Doe"));
            assert!(result.contains("jane@example.com"));
            assert!(result.contains("Acme Inc"));
            assert!(result.contains("We need a new website."));
        }
    }

    #[test]
    fn inquiry_text_without_company() {
        let result = render(
            InquiryTextTemplate {
                company: None,
                ..inquiry_text_template()
            },
            Locale::El,
        );

        assert!(!result.contains("Εταιρεία"));
    }

    fn render<T: Template + 'static>(template: T, locale: Locale) -> String {
        // Arrange
        let sut = TemplateServiceImpl {
            state: Default::default(),
        };

        // Act
        let result = sut.render(&template, locale);

        // Assert
        result.unwrap()
    }

    fn inquiry_html_template() -> InquiryHtmlTemplate {
        InquiryHtmlTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: Some("Acme Inc".into()),
            message: "We need a new website.".into(),
        }
    }

    fn inquiry_text_template() -> InquiryTextTemplate {
        InquiryTextTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: Some("Acme Inc".into()),
            message: "We need a new website.".into(),
        }
    }
}
