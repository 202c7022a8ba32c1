use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::petal_button::PetalButton;
use crate::config::AUTHOR_ID;
use crate::theme::brand_gradient;

#[function_component(AuthorSection)]
pub fn author_section() -> Html {
    let css = format!(
        r#"
        .author {{
            padding: 6rem 0;
            background: #020617;
            position: relative;
            overflow: hidden;
        }}
        .author::before {{
            content: '';
            position: absolute;
            top: 0;
            right: 0;
            width: 50%;
            height: 100%;
            pointer-events: none;
            background: linear-gradient(to left, rgba(139, 92, 246, 0.05), transparent);
        }}
        .author-grid {{
            display: grid;
            gap: 4rem;
            align-items: center;
        }}
        .portrait-frame {{
            position: relative;
            animation: popIn 0.8s ease-out both;
        }}
        .portrait-ring {{
            width: 100%;
            aspect-ratio: 1 / 1;
            padding: 4px;
            border-radius: 40px 10px 40px 10px;
            background: {ring};
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
            overflow: hidden;
        }}
        .portrait-ring > div {{
            width: 100%;
            height: 100%;
            background: #0F172A;
            border-radius: 38px 8px 38px 8px;
            overflow: hidden;
        }}
        .portrait-ring img {{
            width: 100%;
            height: 100%;
            object-fit: cover;
        }}
        .author-stats {{
            position: absolute;
            bottom: -1.5rem;
            right: -1.5rem;
        }}
        .author-stats .glass-card {{
            display: flex;
            align-items: center;
            border-color: rgba(6, 182, 212, 0.3);
        }}
        .stat {{
            text-align: center;
            padding: 0 1rem;
        }}
        .stat + .stat {{
            border-left: 1px solid rgba(255, 255, 255, 0.1);
        }}
        .stat strong {{
            display: block;
            font-size: 1.875rem;
            font-weight: 900;
            color: white;
        }}
        .stat span {{
            font-size: 10px;
            text-transform: uppercase;
            color: #94a3b8;
            letter-spacing: -0.05em;
        }}
        .highlights {{
            margin-bottom: 2.5rem;
        }}
        .highlight {{
            display: flex;
            gap: 1rem;
            margin-bottom: 1.5rem;
        }}
        .highlight .icon {{
            flex-shrink: 0;
            width: 3rem;
            height: 3rem;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
        }}
        .highlight h4 {{
            color: white;
            font-weight: 700;
        }}
        .highlight p {{
            color: #94a3b8;
            font-size: 0.875rem;
            margin: 0.25rem 0 0;
        }}
        @media (min-width: 1024px) {{
            .author-grid {{ grid-template-columns: 1fr 1fr; }}
        }}
        "#,
        ring = brand_gradient("to top right"),
    );

    html! {
        <section id={AUTHOR_ID} class="author">
            <style>{css}</style>
            <div class="container">
                <div class="author-grid">
                    <div class="portrait-frame">
                        <div class="portrait-ring">
                            <div>
                                <img
                                    src="https://images.unsplash.com/photo-1519085185758-29178f0d9ef6?auto=format&fit=crop&q=80&w=800"
                                    alt="Suraj Kumar Gupta"
                                    loading="lazy"
                                />
                            </div>
                        </div>
                        <div class="author-stats">
                            <GlassCard>
                                <div class="stat">
                                    <strong>{"17"}</strong>
                                    <span>{"Age of Author"}</span>
                                </div>
                                <div class="stat">
                                    <strong>{"1"}</strong>
                                    <span>{"Published Novel"}</span>
                                </div>
                            </GlassCard>
                        </div>
                    </div>

                    <div>
                        <h2 class="section-title">
                            {"The Mind Behind "}<span class="accent-cyan">{"Riverside"}</span>
                        </h2>
                        <p class="lead">
                            {"Suraj Kumar Gupta is a 17-year-old innovator from India who blends his technical prowess with deep storytelling. At the intersection of literature and code, Suraj explores how digital systems impact our human connections."}
                        </p>
                        <div class="highlights">
                            <div class="highlight">
                                <div class="icon" style="background: rgba(139, 92, 246, 0.1); color: #8B5CF6;">{"🌐"}</div>
                                <div>
                                    <h4>{"Innovation First"}</h4>
                                    <p>{"Passionate about decentralized systems and user-owned data."}</p>
                                </div>
                            </div>
                            <div class="highlight">
                                <div class="icon" style="background: rgba(6, 182, 212, 0.1); color: #06B6D4;">{"💬"}</div>
                                <div>
                                    <h4>{"Community Voice"}</h4>
                                    <p>{"Speaker at youth tech conferences advocating for digital ethics."}</p>
                                </div>
                            </div>
                        </div>
                        <PetalButton primary={false}>
                            {"Follow Suraj's Journey "}<span class="arrow">{"→"}</span>
                        </PetalButton>
                    </div>
                </div>
            </div>
        </section>
    }
}
