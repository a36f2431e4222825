use std::time::Duration;

use softorize::contact::{Field, SubmissionState, Timer, drive};

use super::*;

struct NoDelay;

#[async_trait::async_trait(?Send)]
impl Timer for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

fn filled_signal() -> RwSignal<ContactForm> {
    let form = RwSignal::new(ContactForm::default());
    let handle = SignalForm(form);
    handle.dispatch(FormEvent::Edit(Field::Name, "Ava".into()));
    handle.dispatch(FormEvent::Edit(Field::Email, "ava@x.com".into()));
    handle.dispatch(FormEvent::Edit(Field::Message, "Hi".into()));
    form
}

#[test]
fn signal_form_dispatch_updates_signal() {
    let form = filled_signal();
    assert_eq!(form.with_untracked(|f| f.fields().name.clone()), "Ava");
}

#[test]
fn signal_form_returns_effects_from_dispatch() {
    let form = filled_signal();
    let effects = SignalForm(form).dispatch(FormEvent::Submit);
    assert!(matches!(&effects[..], [Effect::Deliver(p)] if p.email == "ava@x.com"));
    assert_eq!(form.with_untracked(ContactForm::state), SubmissionState::Sending);
}

#[test]
fn unbuildable_mailer_fails_the_submission() {
    let form = filled_signal();
    let mailer = SiteMailer(Err(DeliveryError::ClientBuild("no http client".into())));

    futures::executor::block_on(drive(&SignalForm(form), &mailer, &NoDelay, FormEvent::Submit));

    form.with_untracked(|f| {
        assert_eq!(f.state(), SubmissionState::Failed);
        assert_eq!(f.fields().name, "Ava");
        assert_eq!(f.fields().message, "Hi");
        assert!(f.submit_control().enabled);
        // NoDelay expires the banner immediately.
        assert!(f.banner().is_none());
    });
}

#[test]
fn one_mailer_serves_repeated_submissions() {
    let form = filled_signal();
    let mailer = Rc::new(SiteMailer(Err(DeliveryError::ClientBuild("no http client".into()))));

    futures::executor::block_on(drive(&SignalForm(form), &*mailer, &NoDelay, FormEvent::Submit));
    futures::executor::block_on(drive(&SignalForm(form), &*mailer, &NoDelay, FormEvent::Submit));

    assert_eq!(Rc::strong_count(&mailer), 1);
    assert_eq!(form.with_untracked(ContactForm::state), SubmissionState::Failed);
    assert!(form.with_untracked(|f| f.submit_control().enabled));
}

#[test]
fn site_mailer_builds_from_config() {
    let mailer = SiteMailer::new(EmailJsConfig::default());
    assert!(mailer.0.is_ok());
}
