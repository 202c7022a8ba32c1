use yew::prelude::*;

use crate::components::floating_petals::FloatingPetals;
use crate::components::petal_button::PetalButton;
use crate::config::{anchor_href, BOOKSTORE_URL, STORY_ID};
use crate::theme::{brand_gradient, MIDNIGHT};

#[function_component(Hero)]
pub fn hero() -> Html {
    let css = format!(
        r#"
        .hero {{
            position: relative;
            height: 100vh;
            width: 100%;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            background: {midnight};
        }}
        .hero-glow {{
            position: absolute;
            inset: 0;
            pointer-events: none;
            background: linear-gradient(to bottom, rgba(139, 92, 246, 0.1), rgba(217, 70, 239, 0.05), {midnight});
        }}
        .hero-content {{
            position: relative;
            z-index: 10;
            text-align: center;
            padding: 0 1.5rem;
            max-width: 56rem;
        }}
        .hero-byline {{
            color: #06B6D4;
            font-weight: 700;
            letter-spacing: 0.2em;
            margin-bottom: 1rem;
            text-transform: uppercase;
            font-size: 0.875rem;
            animation: riseIn 0.6s ease-out both;
        }}
        .hero h1 {{
            font-size: clamp(3.75rem, 10vw, 6rem);
            font-weight: 900;
            color: white;
            margin-bottom: 1.5rem;
            line-height: 1.1;
            animation: riseIn 0.6s ease-out 0.2s both;
        }}
        .hero-tagline {{
            font-size: 1.25rem;
            color: #cbd5e1;
            margin: 0 auto 2.5rem;
            max-width: 42rem;
            line-height: 1.6;
            animation: fadeIn 0.6s ease-out 0.4s both;
        }}
        .hero-actions {{
            display: flex;
            flex-wrap: wrap;
            align-items: center;
            justify-content: center;
            gap: 1rem;
            animation: popIn 0.6s ease-out 0.6s both;
        }}
        .kindle-link {{
            padding: 0.75rem 2rem;
            border-radius: 20px 5px 20px 5px;
            border: 1px solid rgba(255, 255, 255, 0.2);
            color: white;
            font-weight: 600;
            transition: background 0.3s ease;
        }}
        .kindle-link:hover {{
            background: rgba(255, 255, 255, 0.05);
        }}
        .book-mockup {{
            display: none;
            position: absolute;
            right: -5rem;
            top: 50%;
            width: 400px;
            height: 600px;
            transform-style: preserve-3d;
            animation: bookIn 1.5s ease-out 0.8s both;
        }}
        .book-cover {{
            position: relative;
            width: 100%;
            height: 100%;
            padding: 2rem;
            display: flex;
            flex-direction: column;
            justify-content: flex-end;
            overflow: hidden;
            background: {cover};
            border-radius: 0 1.5rem 1.5rem 0;
            box-shadow: 50px 0 100px rgba(0, 0, 0, 0.5);
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-left: none;
        }}
        .book-cover::before {{
            content: '';
            position: absolute;
            inset: 0;
            opacity: 0.2;
            background: url('https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&q=80&w=1000') center / cover;
        }}
        .book-cover h2 {{
            position: relative;
            font-size: 2.25rem;
            font-weight: 900;
            color: white;
            line-height: 1;
            margin-bottom: 0.5rem;
        }}
        .book-cover p {{
            position: relative;
            color: rgba(255, 255, 255, 0.8);
            font-size: 1.125rem;
            text-transform: uppercase;
            letter-spacing: 0.1em;
            font-weight: 700;
        }}
        @media (min-width: 1024px) {{
            .book-mockup {{ display: block; }}
        }}
        @keyframes bookIn {{
            from {{ opacity: 0; transform: translate(100px, -50%) rotateY(30deg); }}
            to {{ opacity: 1; transform: translate(0, -50%) rotateY(15deg); }}
        }}
        "#,
        midnight = MIDNIGHT,
        cover = brand_gradient("to bottom right"),
    );

    html! {
        <section class="hero">
            <style>{css}</style>
            <div class="hero-glow"></div>
            <FloatingPetals />

            <div class="hero-content">
                <p class="hero-byline">{"A Novel by Suraj Kumar Gupta"}</p>
                <h1>
                    {"Code of "}<span class="gradient-text">{"Survival"}</span>
                </h1>
                <p class="hero-tagline">
                    {"In a world where convenience is the ultimate currency, a group of young innovators discovers that privacy is the only true power."}
                </p>
                <div class="hero-actions">
                    <PetalButton href={anchor_href(STORY_ID)} class="hero-start">
                        {"Start Reading "}<span class="arrow">{"→"}</span>
                    </PetalButton>
                    <a href={BOOKSTORE_URL} target="_blank" rel="noopener noreferrer" class="kindle-link">
                        {"Amazon Kindle ↗"}
                    </a>
                </div>
            </div>

            <div class="book-mockup" aria-hidden="true">
                <div class="book-cover">
                    <h2>{"CODE OF SURVIVAL"}</h2>
                    <p>{"Startup Surge"}</p>
                </div>
            </div>
        </section>
    }
}
