use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::lead_form::LeadForm;
use crate::config::INNOVATION_ID;

#[function_component(InnovatorsSection)]
pub fn innovators_section() -> Html {
    html! {
        <section id={INNOVATION_ID} class="innovators">
            <style>
                {r#"
                    .innovators {
                        padding: 6rem 0;
                        background: #0F172A;
                        position: relative;
                        overflow: hidden;
                    }
                    .innovators-grid {
                        display: grid;
                        gap: 4rem;
                        align-items: center;
                    }
                    .innovators-copy {
                        animation: slideFromLeft 0.8s ease-out both;
                    }
                    .pill {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(6, 182, 212, 0.1);
                        border: 1px solid rgba(6, 182, 212, 0.2);
                        color: #06B6D4;
                        font-weight: 700;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 1.5rem;
                    }
                    .connect-local {
                        margin-bottom: 2rem;
                        border-color: rgba(6, 182, 212, 0.2);
                    }
                    .connect-local h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: white;
                        margin-bottom: 0.75rem;
                    }
                    .connect-local p {
                        color: #cbd5e1;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .quote {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(139, 92, 246, 0.2);
                        background: linear-gradient(to bottom right, rgba(139, 92, 246, 0.2), transparent);
                    }
                    .quote blockquote {
                        margin: 0 0 1rem;
                        color: white;
                        font-style: italic;
                        font-size: 1.125rem;
                    }
                    .quote-author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .quote-author img {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        object-fit: cover;
                        border: 2px solid #8B5CF6;
                    }
                    .quote-author strong {
                        display: block;
                        color: white;
                    }
                    .quote-author span {
                        color: #94a3b8;
                        font-size: 0.875rem;
                    }
                    .form-card {
                        position: relative;
                        padding: 2.5rem;
                        border-color: rgba(217, 70, 239, 0.2);
                        animation: riseIn 0.8s ease-out both;
                    }
                    .form-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: white;
                        margin-bottom: 0.5rem;
                    }
                    .form-card > p {
                        color: #94a3b8;
                        margin: 0 0 2rem;
                    }
                    @media (min-width: 1024px) {
                        .innovators-grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="innovators-grid">
                    <div class="innovators-copy">
                        <div class="pill">{"🏆 Future of Tech"}</div>
                        <h2 class="section-title">
                            {"Empowering the Next Generation of "}
                            <span class="accent-cyan">{"Ethical Innovators"}</span>
                        </h2>
                        <p class="lead">
                            {"Suraj Kumar Gupta, the 17-year-old visionary behind "}
                            <em>{"Startup Surge"}</em>
                            {", believes that technology should be a tool for community empowerment, not just a mechanism for surveillance."}
                        </p>

                        <GlassCard class="connect-local">
                            <h3>{"🛡 Connect Local: Privacy by Design"}</h3>
                            <p>
                                {"The Connect Local platform concept explores a decentralized social network where data never leaves the user's community. It's a vision for ethical innovation where privacy is the foundational layer."}
                            </p>
                        </GlassCard>

                        <div class="quote">
                            <blockquote>
                                {"\"Technology reconnects us... through the shared stories it enables. We must build for trust, not just for clicks.\""}
                            </blockquote>
                            <div class="quote-author">
                                <img
                                    src="https://suraj-k-gupta-dev.github.io/Code-of-survival/IMG_20260104_210539.jpg?auto=format&fit=crop&q=80&w=100"
                                    alt="Suraj"
                                />
                                <div>
                                    <strong>{"Suraj Kumar Gupta"}</strong>
                                    <span>{"Author & Innovator"}</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <GlassCard class="form-card">
                        <h3>{"Submit Your Innovation"}</h3>
                        <p>{"Are you building something ethical? We want to showcase young developers who prioritize community and privacy."}</p>
                        <LeadForm />
                    </GlassCard>
                </div>
            </div>
        </section>
    }
}
