use yew::prelude::*;

use crate::config::STORY_ID;

#[function_component(StorySection)]
pub fn story_section() -> Html {
    html! {
        <section id={STORY_ID} class="story container">
            <style>
                {r#"
                    .story {
                        padding: 6rem 1.5rem;
                        display: grid;
                        gap: 4rem;
                        align-items: center;
                    }
                    .story-copy {
                        animation: slideFromLeft 0.8s ease-out both;
                    }
                    .story-tiles {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .story-tile {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .story-tile .glyph {
                        display: block;
                        font-size: 1.5rem;
                        margin-bottom: 0.5rem;
                    }
                    .story-tile h4 {
                        color: white;
                        font-size: 0.875rem;
                        font-weight: 700;
                    }
                    .story-image {
                        position: relative;
                    }
                    .story-image img {
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                        opacity: 0.5;
                        filter: grayscale(1);
                        transition: filter 1s ease;
                    }
                    .story-image img:hover {
                        filter: grayscale(0);
                    }
                    .story-image::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(to top, #020617, transparent);
                    }
                    @media (min-width: 768px) {
                        .story { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
            <div class="story-copy">
                <h2 class="section-title">
                    {"20 Chapters of "}<span class="accent-violet">{"High-Stakes"}</span>{" Tech Noir"}
                </h2>
                <p class="lead">
                    {"In the heart of Riverside, the boundary between community and convenience has blurred. When Sue Chan discovers the true price of her city's technological \"utopia,\" she must lead a group of misfits to reclaim their digital sovereignty."}
                </p>
                <div class="story-tiles">
                    <div class="story-tile">
                        <span class="glyph accent-cyan">{"🛡"}</span>
                        <h4>{"Ethics First"}</h4>
                    </div>
                    <div class="story-tile">
                        <span class="glyph accent-magenta">{"</>"}</span>
                        <h4>{"Privacy Code"}</h4>
                    </div>
                </div>
            </div>
            <div class="story-image">
                <img
                    src="https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&q=80&w=1000"
                    alt="Tech City"
                    loading="lazy"
                />
            </div>
        </section>
    }
}
