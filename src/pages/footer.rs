use yew::prelude::*;

use crate::config::{anchor_href, BOOKSTORE_URL, CHARACTERS_ID, INNOVATION_ID};
use crate::theme::{CYAN, VIOLET};

#[function_component(Footer)]
pub fn footer() -> Html {
    let css = format!(
        r#"
        .site-footer {{
            background: #020617;
            border-top: 1px solid rgba(255, 255, 255, 0.05);
            padding: 5rem 0 2.5rem;
        }}
        .footer-grid {{
            display: grid;
            gap: 3rem;
            margin-bottom: 4rem;
        }}
        .footer-brand {{
            display: flex;
            align-items: center;
            gap: 0.5rem;
            margin-bottom: 1.5rem;
        }}
        .footer-mark {{
            width: 2rem;
            height: 2rem;
            display: flex;
            align-items: center;
            justify-content: center;
            border-radius: 10px 3px 10px 3px;
            background: linear-gradient(to top right, {violet}, {cyan});
        }}
        .footer-brand span {{
            font-size: 1.125rem;
            font-weight: 700;
            color: white;
            letter-spacing: -0.025em;
        }}
        .footer-blurb {{
            color: #64748b;
            max-width: 24rem;
            line-height: 1.6;
        }}
        .site-footer h4 {{
            color: white;
            font-weight: 700;
            margin-bottom: 1.5rem;
        }}
        .site-footer ul {{
            list-style: none;
            padding: 0;
            margin: 0;
            color: #64748b;
        }}
        .site-footer li {{
            margin-bottom: 1rem;
        }}
        .site-footer a:hover {{
            color: white;
        }}
        .social {{
            display: flex;
            gap: 1rem;
        }}
        .social a {{
            width: 2.5rem;
            height: 2.5rem;
            border-radius: 50%;
            background: rgba(255, 255, 255, 0.05);
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
            transition: background 0.3s ease;
        }}
        .social a:hover {{
            background: rgba(255, 255, 255, 0.1);
        }}
        .footer-bottom {{
            border-top: 1px solid rgba(255, 255, 255, 0.05);
            padding-top: 2rem;
            display: flex;
            flex-direction: column;
            justify-content: space-between;
            align-items: center;
            gap: 1rem;
            color: #475569;
            font-size: 0.875rem;
        }}
        .footer-bottom p {{
            margin: 0;
        }}
        .footer-bottom div {{
            display: flex;
            gap: 2rem;
        }}
        .footer-bottom a:hover {{
            color: #94a3b8;
        }}
        @media (min-width: 768px) {{
            .footer-grid {{ grid-template-columns: 2fr 1fr 1fr; }}
            .footer-bottom {{ flex-direction: row; }}
        }}
        "#,
        violet = VIOLET,
        cyan = CYAN,
    );

    html! {
        <footer class="site-footer">
            <style>{css}</style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <div class="footer-mark">{"📖"}</div>
                            <span>{"STARTUP SURGE"}</span>
                        </div>
                        <p class="footer-blurb">
                            {"A literary journey through the ethics of innovation. Build for humanity, protect your privacy, and find your survival code."}
                        </p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            <li><a href="#">{"Home"}</a></li>
                            <li><a href={anchor_href(INNOVATION_ID)}>{"Innovation"}</a></li>
                            <li><a href={anchor_href(CHARACTERS_ID)}>{"Characters"}</a></li>
                            <li>
                                <a href={BOOKSTORE_URL} target="_blank" rel="noopener noreferrer">{"Buy Book"}</a>
                            </li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Social"}</h4>
                        <div class="social">
                            <a href="#" aria-label="Website">{"🌐"}</a>
                            <a href="#" aria-label="Email">{"✉"}</a>
                            <a href="#" aria-label="Code">{"</>"}</a>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 Code of Survival: Startup Surge. All rights reserved."}</p>
                    <div>
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
