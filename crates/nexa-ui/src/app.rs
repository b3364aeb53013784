//! Main application component
//!
//! Orders the sections top to bottom and provides the site configuration
//! to all of them.

use leptos::prelude::*;

use crate::config::{SiteConfig, provide_site_config};
use crate::sections::{
    CaseStudies, Footer, Header, Hero, LeadMagnet, MobileCta, Services, Testimonials,
    TrustSection, ValueProp,
};

/// Root component of the landing page
///
/// Takes an optional configuration; the defaults are used otherwise.
#[component]
pub fn App(#[prop(optional)] config: Option<SiteConfig>) -> impl IntoView {
    provide_site_config(config.unwrap_or_default());

    view! {
        <div class="font-sans text-slate-800">
            <Header />
            <main>
                <Hero />
                <TrustSection />
                <Testimonials />
                <ValueProp />
                <Services />
                <CaseStudies />
                <LeadMagnet />
            </main>
            <Footer />
            <MobileCta />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
    }
}
