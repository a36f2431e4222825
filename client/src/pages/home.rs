//! Single-page marketing layout: hero, products, industries, contact.

use leptos::prelude::*;
use softorize::config::SiteConfig;

use crate::components::contact_form::ContactSection;
use crate::util::scroll::follow_anchor;

const PRODUCTS: &[(&str, &str)] = &[
    ("Custom Software", "Web and desktop applications built around your workflow."),
    ("Cloud Platforms", "Scalable back ends, migrations, and managed infrastructure."),
    ("Mobile Apps", "Native-feeling apps for iOS and Android from one codebase."),
];

const INDUSTRIES: &[&str] = &["Healthcare", "Finance", "Retail", "Logistics", "Education", "Manufacturing"];

#[component]
pub fn HomePage(config: SiteConfig) -> impl IntoView {
    let SiteConfig { emailjs, contact } = config;

    view! {
        <main>
            <section id="home" class="hero">
                <div class="container">
                    <h1>"Software that moves your business forward"</h1>
                    <p>"We design, build, and run the products your teams rely on."</p>
                    <a href="#contact" class="btn btn-primary" on:click=move |ev| follow_anchor(&ev, "#contact")>
                        "Start a project"
                    </a>
                </div>
            </section>

            <section id="products" class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>"Products"</h2>
                    </div>
                    <div class="product-grid">
                        {PRODUCTS
                            .iter()
                            .map(|&(title, blurb)| {
                                view! {
                                    <article class="product-card">
                                        <h3>{title}</h3>
                                        <p>{blurb}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="industries" class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>"Industries"</h2>
                    </div>
                    <ul class="industry-grid">
                        {INDUSTRIES
                            .iter()
                            .map(|&name| view! { <li class="industry-item">{name}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </section>

            <ContactSection emailjs=emailjs settings=contact/>
        </main>
    }
}
