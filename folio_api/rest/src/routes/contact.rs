use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing, Form, Router,
};
use folio_core_contact_contracts::ContactService;
use folio_form::{ContactForm, FormView};
use folio_models::contact::FormStatus;
use folio_templates_contracts::{ContactPageTemplate, TemplateService};

use crate::{
    errors::internal_server_error,
    models::contact::{ApiContactForm, ApiContactFormAction},
};

pub struct ContactPage<Contact, Templates> {
    pub contact: Contact,
    pub templates: Templates,
}

pub fn router<Contact, Templates>(page: Arc<ContactPage<Contact, Templates>>) -> Router<()>
where
    Contact: ContactService,
    Templates: TemplateService,
{
    Router::new()
        .route(
            "/contact",
            routing::get(show::<Contact, Templates>).post(post::<Contact, Templates>),
        )
        .with_state(page)
}

async fn show<Contact, Templates>(
    State(page): State<Arc<ContactPage<Contact, Templates>>>,
) -> Response
where
    Contact: ContactService,
    Templates: TemplateService,
{
    let form = ContactForm::new(&page.contact);
    render(&page.templates, form.view())
}

async fn post<Contact, Templates>(
    State(page): State<Arc<ContactPage<Contact, Templates>>>,
    Form(posted): Form<ApiContactForm>,
) -> Response
where
    Contact: ContactService,
    Templates: TemplateService,
{
    let action = posted.action;
    // Pages are only ever rendered once a submission has finished.
    let status = match posted.status {
        FormStatus::Submitting => FormStatus::Idle,
        status => status,
    };

    let mut form = ContactForm::with_state(&page.contact, posted.into(), status);
    match action {
        ApiContactFormAction::Submit => {
            form.submit().await;
        }
        ApiContactFormAction::Dismiss => form.dismiss(),
    }

    render(&page.templates, form.view())
}

fn render(templates: &impl TemplateService, form: FormView) -> Response {
    match templates.render(&ContactPageTemplate { form }) {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_server_error(err),
    }
}
