use verta_core_contact_impl::ContactServiceImpl;
use verta_core_health_impl::HealthServiceImpl;
use verta_email_impl::EmailServiceImpl;
use verta_shared_impl::time::TimeServiceImpl;
use verta_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = verta_api_rest::RestServer<Contact, Health>;

// Email
pub type Email = EmailServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type Contact = ContactServiceImpl<Email, Template>;
pub type Health = HealthServiceImpl<Time, Email>;
