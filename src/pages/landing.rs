use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::{glass_card, petal_button};
use crate::pages::{
    author::AuthorSection, characters::CharactersSection, discussion::DiscussionGuide,
    footer::Footer, hero::Hero, innovators::InnovatorsSection, story::StorySection,
};
use crate::theme::{brand_gradient, CYAN, MAGENTA, VIOLET};

/// Layout helpers, accents and keyframes shared by every section.
fn shared_css() -> String {
    format!(
        r#"
        .container {{
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
        }}
        .section-title {{
            font-size: clamp(2.25rem, 5vw, 3rem);
            font-weight: 900;
            color: white;
            line-height: 1.2;
            margin-bottom: 1.5rem;
        }}
        .lead {{
            color: #94a3b8;
            font-size: 1.125rem;
            line-height: 1.7;
            margin: 0 0 2rem;
        }}
        .gradient-text {{
            background: {gradient};
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }}
        .accent-violet {{ color: {violet}; }}
        .accent-magenta {{ color: {magenta}; }}
        .accent-cyan {{ color: {cyan}; }}
        ::selection {{
            background: rgba(217, 70, 239, 0.3);
            color: white;
        }}
        ::-webkit-scrollbar {{ width: 8px; }}
        ::-webkit-scrollbar-track {{ background: #020617; }}
        ::-webkit-scrollbar-thumb {{ background: #1e293b; border-radius: 10px; }}
        ::-webkit-scrollbar-thumb:hover {{ background: #334155; }}
        @keyframes riseIn {{
            from {{ opacity: 0; transform: translateY(20px); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}
        @keyframes fadeIn {{
            from {{ opacity: 0; }}
            to {{ opacity: 1; }}
        }}
        @keyframes popIn {{
            from {{ opacity: 0; transform: scale(0.9); }}
            to {{ opacity: 1; transform: scale(1); }}
        }}
        @keyframes slideFromLeft {{
            from {{ opacity: 0; transform: translateX(-30px); }}
            to {{ opacity: 1; transform: translateX(0); }}
        }}
        {buttons}
        {cards}
        "#,
        gradient = brand_gradient("to right"),
        violet = VIOLET,
        magenta = MAGENTA,
        cyan = CYAN,
        buttons = petal_button::css(),
        cards = glass_card::CSS,
    )
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <>
            <style>{shared_css()}</style>
            <main>
                <Hero />
                <StorySection />
                <CharactersSection catalog={props.catalog.clone()} />
                <InnovatorsSection />
                <DiscussionGuide catalog={props.catalog.clone()} />
                <AuthorSection />
            </main>
            <Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAV_SECTIONS;
    use crate::render::render;

    #[tokio::test]
    async fn every_nav_anchor_lands_on_exactly_one_section_in_page_order() {
        let catalog = Rc::new(Catalog::load().unwrap());
        let html = render::<Landing>(LandingProps { catalog }).await;

        let mut previous = 0;
        for section in NAV_SECTIONS {
            let id = format!(r#"<section id="{}""#, section.anchor);
            assert_eq!(html.matches(&id).count(), 1, "{}", section.label);

            let at = html.find(&id).unwrap();
            assert!(at > previous, "{} is out of order", section.label);
            previous = at;
        }
    }
}
