use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::glass_card::GlassCard;
use crate::config::BOOK_CLUB_ID;

#[derive(Properties, PartialEq)]
pub struct DiscussionGuideProps {
    pub catalog: Rc<Catalog>,
}

/// Book club prompts, numbered in catalog order.
#[function_component(DiscussionGuide)]
pub fn discussion_guide(props: &DiscussionGuideProps) -> Html {
    html! {
        <section id={BOOK_CLUB_ID} class="discussion">
            <style>
                {r#"
                    .discussion {
                        padding: 6rem 0;
                        background: #0F172A;
                    }
                    .discussion-card {
                        padding: 3rem;
                        border-color: rgba(217, 70, 239, 0.2);
                    }
                    .discussion-grid {
                        display: grid;
                        gap: 3rem;
                    }
                    .discussion-intro ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .discussion-intro li {
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 1rem;
                    }
                    .prompts {
                        display: grid;
                        gap: 1rem;
                    }
                    .prompt {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        cursor: default;
                        transition: border-color 0.3s ease;
                    }
                    .prompt:hover {
                        border-color: rgba(255, 255, 255, 0.2);
                    }
                    .prompt-number {
                        display: block;
                        color: #D946EF;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                        opacity: 0.5;
                    }
                    .prompt p {
                        color: #e2e8f0;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin: 0;
                        transition: color 0.3s ease;
                    }
                    .prompt:hover p {
                        color: white;
                    }
                    @media (min-width: 768px) {
                        .prompts { grid-template-columns: 1fr 1fr; }
                    }
                    @media (min-width: 1024px) {
                        .discussion-grid { grid-template-columns: 1fr 2fr; }
                    }
                "#}
            </style>
            <div class="container">
                <GlassCard class="discussion-card">
                    <div class="discussion-grid">
                        <div class="discussion-intro">
                            <h2 class="section-title">
                                {"Book Club "}<span class="accent-magenta">{"Discussion Guide"}</span>
                            </h2>
                            <p class="lead">
                                {"Dive deeper into the ethical dilemmas and technological foresight of "}
                                <em>{"Startup Surge"}</em>
                                {" with these curated conversation starters."}
                            </p>
                            <ul>
                                <li>{"👥 Perfect for tech ethics classes"}</li>
                                <li>{"🌐 Global privacy implications"}</li>
                                <li>{"♥ Character-driven analysis"}</li>
                            </ul>
                        </div>
                        <div class="prompts">
                            { for props.catalog.questions().map(|question| html! {
                                <div key={question.position} class="prompt">
                                    <span class="prompt-number">{question.label()}</span>
                                    <p>{question.prompt}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </GlassCard>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[tokio::test]
    async fn lists_eight_prompts_numbered_01_to_08() {
        let catalog = Rc::new(Catalog::load().unwrap());
        let html = render::<DiscussionGuide>(DiscussionGuideProps { catalog }).await;

        assert_eq!(html.matches(r#"class="prompt""#).count(), 8);

        let mut previous = 0;
        for n in 1..=8 {
            let label = format!(r#"<span class="prompt-number">#{:02}</span>"#, n);
            let at = html.find(&label).unwrap();
            assert!(at > previous, "#{:02} is out of order", n);
            previous = at;
        }
    }
}
