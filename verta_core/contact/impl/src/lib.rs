use std::sync::Arc;

use verta_core_contact_contracts::{ContactService, ContactSubmitError};
use verta_di::Build;
use verta_email_contracts::{Email, EmailBody, EmailSendError, EmailService};
use verta_models::{
    contact::{ContactSubmission, SubmissionCompany},
    email_address::EmailAddressWithName,
};
use verta_templates_contracts::{InquiryHtmlTemplate, InquiryTextTemplate, TemplateService};

#[derive(Debug, Clone, Build)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Operator mailbox receiving the inquiries, or `None` if the deployment
    /// has no contact section configured.
    pub recipient: Option<Arc<EmailAddressWithName>>,
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        let locale = submission.locale;
        let inquiry = submission.validate()?;

        let Some(recipient) = self.config.recipient.as_ref() else {
            return Err(ContactSubmitError::NotConfigured);
        };

        let name = inquiry.name.into_inner();
        let company = inquiry.company.map(SubmissionCompany::into_inner);
        let message = inquiry.message.into_inner();

        let subject = match &company {
            Some(company) => format!("New Project Inquiry from {name} ({company})"),
            None => format!("New Project Inquiry from {name}"),
        };

        let plain = self.template.render(
            &InquiryTextTemplate {
                name: name.clone(),
                email: inquiry.email.as_str().into(),
                company: company.clone(),
                message: message.clone(),
            },
            locale,
        )?;
        let html = self.template.render(
            &InquiryHtmlTemplate {
                name: name.clone(),
                email: inquiry.email.as_str().into(),
                company,
                message,
            },
            locale,
        )?;

        let email = Email {
            recipient: (**recipient).clone(),
            subject,
            body: EmailBody::PlainAndHtml { plain, html },
            reply_to: Some(inquiry.email.with_name(name)),
        };

        self.email.send(email).await.map_err(|err| match err {
            EmailSendError::NotConfigured => ContactSubmitError::NotConfigured,
            EmailSendError::Rejected => ContactSubmitError::Send,
            EmailSendError::Other(err) => ContactSubmitError::Other(err),
        })
    }
}
