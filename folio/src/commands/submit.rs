use anyhow::ensure;
use clap::Args;
use folio_config::Config;
use folio_form::{ContactForm, FormEvent};
use folio_models::contact::{DraftField, FormStatus};
use tracing::info;

use crate::environment::Provider;

#[derive(Debug, Clone, Default, Args)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// Must contain at least 10 characters
    #[arg(long)]
    pub message: String,
    /// Value of the hidden anti-spam field
    #[arg(long, default_value = "", hide = true)]
    pub honeypot: String,
}

impl SubmitArgs {
    fn into_events(self) -> impl Iterator<Item = FormEvent> {
        [
            (DraftField::FirstName, self.first_name),
            (DraftField::LastName, self.last_name),
            (DraftField::Email, self.email),
            (DraftField::Message, self.message),
            (DraftField::Honeypot, self.honeypot),
        ]
        .into_iter()
        .map(|(field, value)| FormEvent::Edit { field, value })
        .chain([FormEvent::Submit])
    }
}

/// Send a single contact message through the form controller.
pub async fn submit(config: Config, args: SubmitArgs) -> anyhow::Result<()> {
    let provider = Provider::new(&config)?;
    let contact = provider.contact();
    let mut form = ContactForm::new(&contact);

    let mut status = form.status();
    for event in args.into_events() {
        status = form.dispatch(event).await;
    }

    info!(?status, "Submission finished");
    if let Some(notification) = form.view().notification {
        println!("{}", notification.text);
    }

    ensure!(status == FormStatus::Success, "Failed to send message");

    Ok(())
}
