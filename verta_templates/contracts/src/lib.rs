use serde::Serialize;
use verta_models::locale::Locale;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template in the requested language.
    fn render<T: Template + 'static>(&self, template: &T, locale: Locale)
        -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        locale: Locale,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(
                mockall::predicate::eq(template),
                mockall::predicate::eq(locale),
            )
            .return_once(|_, _| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident { $( $locale:ident => $path:literal ),+ $(,)? } ),* $(,)? ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
            }
        )*

        /// All template sources, keyed by template name and locale.
        pub const TEMPLATES: &[(&str, Locale, &str)] = &[
            $($(
                (
                    $ident::NAME,
                    Locale::$locale,
                    include_str!(concat!("../templates/", $path)),
                )
            ),+),*
        ];
    };
}

templates! {
    InquiryHtmlTemplate {
        En => "project_inquiry.en.html",
        El => "project_inquiry.el.html",
    },
    InquiryTextTemplate {
        En => "project_inquiry.en.txt",
        El => "project_inquiry.el.txt",
    },
}

/// HTML notification about a new project inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryHtmlTemplate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

/// Plain-text counterpart of [`InquiryHtmlTemplate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryTextTemplate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}
