//! Contact section: inputs, inline field errors, submit button, result banner.
//!
//! Everything shown here is derived from the core `ContactForm` held in a
//! signal. Inputs feed `Edit` events; submit hands off to `net::contact`.

use std::rc::Rc;

use leptos::prelude::*;
use softorize::config::{ContactSettings, EmailJsConfig};
use softorize::contact::{ContactForm, Field, FormEvent, FormHandle};

use crate::net::contact::{SignalForm, SiteMailer, submit};

const FIELD_ERROR_STYLE: &str = "color: var(--accent-primary); font-size: 0.75rem; margin-top: 0.25rem;";

#[component]
pub fn ContactSection(emailjs: EmailJsConfig, settings: ContactSettings) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new(settings));
    let mailer = StoredValue::new_local(Rc::new(SiteMailer::new(emailjs)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(form, mailer.get_value());
    };

    let control = move || form.with(ContactForm::submit_control);
    let banner = move || {
        form.with(|f| f.banner().cloned()).map(|b| {
            view! {
                <div class=format!("form-message form-message-{}", b.kind.css_suffix())>{b.text}</div>
            }
        })
    };

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="section-header">
                    <h2>"Get in Touch"</h2>
                    <p>"Tell us about your project and we'll get back to you within 24 hours."</p>
                </div>
                <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
                    <FormGroup form=form field=Field::Name label="Name"/>
                    <FormGroup form=form field=Field::Email label="Email" input_type="email"/>
                    <FormGroup form=form field=Field::Company label="Company"/>
                    <FormGroup form=form field=Field::Message label="Message" multiline=true/>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || !control().enabled
                        style=move || if control().enabled { "opacity: 1" } else { "opacity: 0.7" }
                    >
                        {move || control().label}
                    </button>
                    {banner}
                </form>
            </div>
        </section>
    }
}

/// One labelled input with its inline error slot.
#[component]
fn FormGroup(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.fields().get(field).to_owned());
    let error = move || form.with(|f| f.errors().message_for(field));
    let class = move || if error().is_some() { "error" } else { "" };
    let on_input = move |ev: leptos::ev::Event| {
        SignalForm(form).dispatch(FormEvent::Edit(field, event_target_value(&ev)));
    };

    let input = if multiline {
        view! {
            <textarea id=field.id() name=field.id() rows="5" class=class prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        view! {
            <input id=field.id() name=field.id() type=input_type class=class prop:value=value on:input=on_input/>
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.id()>{label}</label>
            {input}
            {move || error().map(|msg| view! { <div class="field-error" style=FIELD_ERROR_STYLE>{msg}</div> })}
        </div>
    }
}
