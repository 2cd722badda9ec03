//! Contact command: one form submission.

use anyhow::Result;
use serde::Serialize;

use folio::domain::entities::{FailureKind, SubmitOutcome};
use folio::presentation::factory;
use folio::{ContactFields, ContactForm, Locale};

use super::Invocation;
use crate::ui::events::EventStream;
use crate::ui::output::verbose;
use crate::ui::views::contact::{render_contact_outcome, render_sending};

pub struct ContactArgs {
    pub name: String,
    pub email: String,
    pub message: String,
    pub gotcha: String,
    pub endpoint: Option<String>,
    pub locale: Option<Locale>,
}

pub fn cmd_contact(inv: &Invocation, args: ContactArgs) -> Result<bool> {
    let locale = args.locale.unwrap_or(inv.config.contact.locale);
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| inv.config.contact.endpoint.clone());

    let mut form = ContactForm::new(
        ContactFields::new(args.name, args.email, args.message).with_gotcha(args.gotcha),
    );

    // A tripped honeypot is a silent no-op, whatever the endpoint looks like.
    let outcome = if form.fields().is_honeypot_tripped() {
        SubmitOutcome::Suppressed
    } else {
        let use_case = factory::create_contact_use_case(&inv.config, &endpoint)?;
        verbose(&inv.ui, format!("contact endpoint: {}", endpoint));
        if !inv.ui.json {
            eprintln!(
                "{}",
                render_sending(&form, locale, inv.color(), inv.unicode())
            );
        }
        use_case.submit(&mut form)
    };
    let success = !matches!(outcome, SubmitOutcome::Failed(_));

    if inv.ui.json {
        #[derive(Serialize)]
        struct Submission {
            outcome: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<&'static str>,
        }
        EventStream::stdout("contact").data(&Submission {
            outcome: outcome_name(outcome),
            message: form.status_message(locale),
        })?;
        return Ok(success);
    }

    if let Some(line) = render_contact_outcome(outcome, &form, locale, inv.color(), inv.unicode())
    {
        print!("{}", line);
    }
    Ok(success)
}

fn outcome_name(outcome: SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Sent => "sent",
        SubmitOutcome::Failed(FailureKind::Rejected) => "rejected",
        SubmitOutcome::Failed(FailureKind::Network) => "network_error",
        SubmitOutcome::Suppressed => "suppressed",
        SubmitOutcome::Busy => "busy",
    }
}
