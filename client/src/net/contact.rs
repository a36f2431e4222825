//! Contact form submission wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges the core `drive` loop to the browser: the form lives in a Leptos
//! signal, delivery goes through the EmailJS client, and banner expiry
//! sleeps on a browser timeout.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::rc::Rc;

use leptos::prelude::*;
use softorize::config::EmailJsConfig;
use softorize::contact::{ContactForm, Effect, FormEvent, FormHandle};
use softorize::mailer::{DeliveryError, DeliveryReceipt, EmailJsMailer, Mailer, TemplateParams};

/// Form state held in a signal, borrowed only for the span of one dispatch.
#[derive(Clone, Copy)]
pub struct SignalForm(pub RwSignal<ContactForm>);

impl FormHandle for SignalForm {
    fn dispatch(&self, event: FormEvent) -> Vec<Effect> {
        self.0.try_update(|form| form.dispatch(event)).unwrap_or_default()
    }
}

/// EmailJS mailer, or the reason one could not be built.
///
/// Built once per contact section and shared by every submit attempt.
///
/// A build failure surfaces as a failed delivery so the form still walks
/// through Sending → Failed and shows the fallback contact.
pub struct SiteMailer(Result<EmailJsMailer, DeliveryError>);

impl SiteMailer {
    pub fn new(config: EmailJsConfig) -> Self {
        Self(EmailJsMailer::new(config))
    }
}

#[async_trait::async_trait(?Send)]
impl Mailer for SiteMailer {
    async fn send(&self, params: &TemplateParams) -> Result<DeliveryReceipt, DeliveryError> {
        match &self.0 {
            Ok(mailer) => mailer.send(params).await,
            Err(e) => Err(e.clone()),
        }
    }
}

#[cfg(feature = "csr")]
pub struct BrowserTimer;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl softorize::contact::Timer for BrowserTimer {
    async fn sleep(&self, duration: std::time::Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Run one submit attempt in the background.
pub fn submit(form: RwSignal<ContactForm>, mailer: Rc<SiteMailer>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        softorize::contact::drive(&SignalForm(form), &*mailer, &BrowserTimer, FormEvent::Submit).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (form, mailer);
    }
}
