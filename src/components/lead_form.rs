use yew::prelude::*;

use crate::components::petal_button::PetalButton;
use crate::state::lead_form::{FormEvent, FormState};

/// "Submit Your Innovation" form.
///
/// Placeholder: nothing is sent anywhere. The inputs are `required` so the
/// browser blocks empty submissions, and on submit only the local flag flips
/// to show the confirmation. Wire a real endpoint in here if one appears.
#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let state = use_reducer(FormState::default);

    let on_event = {
        let state = state.clone();
        Callback::from(move |event: FormEvent| state.dispatch(event))
    };

    html! { <LeadFormView state={*state} {on_event} /> }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormViewProps {
    pub state: FormState,
    pub on_event: Callback<FormEvent>,
}

/// Markup for one form state. The fields are uncontrolled, so every switch
/// back to `Editing` mounts them empty.
#[function_component(LeadFormView)]
pub fn lead_form_view(props: &LeadFormViewProps) -> Html {
    let onsubmit = props.on_event.reform(|e: SubmitEvent| {
        e.prevent_default();
        FormEvent::Submit
    });
    let send_another = props.on_event.reform(|_: MouseEvent| FormEvent::SendAnother);

    html! {
        <div class="lead-form">
            <style>
                {r#"
                    .lead-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #cbd5e1;
                        margin-bottom: 0.25rem;
                    }
                    .lead-form .field {
                        margin-bottom: 1rem;
                    }
                    .lead-form input,
                    .lead-form textarea {
                        width: 100%;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem;
                        padding: 0.75rem 1rem;
                        color: white;
                        font: inherit;
                        transition: border-color 0.2s ease;
                    }
                    .lead-form input:focus,
                    .lead-form textarea:focus {
                        outline: none;
                        border-color: #06B6D4;
                    }
                    .lead-form .submit {
                        width: 100%;
                    }
                    .lead-confirmation {
                        text-align: center;
                        padding: 2.5rem 0;
                        animation: confirmIn 0.4s ease-out both;
                    }
                    .lead-confirmation .badge {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        background: rgba(34, 197, 94, 0.2);
                        color: #22c55e;
                        font-size: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .lead-confirmation h4 {
                        font-size: 1.5rem;
                        color: white;
                        margin-bottom: 0.5rem;
                    }
                    .lead-confirmation p {
                        color: #94a3b8;
                    }
                    .send-another {
                        margin-top: 1.5rem;
                        background: none;
                        border: none;
                        color: #06B6D4;
                        font: inherit;
                        cursor: pointer;
                    }
                    .send-another:hover {
                        text-decoration: underline;
                    }
                    @keyframes confirmIn {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            {
                match props.state {
                    FormState::Editing => html! {
                        <form {onsubmit}>
                            <div class="field">
                                <label for="lead-name">{"Your Name"}</label>
                                <input id="lead-name" type="text" placeholder="Jane Doe" required={true} />
                            </div>
                            <div class="field">
                                <label for="lead-project">{"Project Name"}</label>
                                <input id="lead-project" type="text" placeholder="EcoConnect" required={true} />
                            </div>
                            <div class="field">
                                <label for="lead-vision">{"Tell us about your ethical vision"}</label>
                                <textarea
                                    id="lead-vision"
                                    rows="4"
                                    placeholder="How does your project respect user privacy?"
                                    required={true}
                                />
                            </div>
                            <PetalButton button_type="submit" class="submit">
                                {"Submit My Idea"}
                            </PetalButton>
                        </form>
                    },
                    FormState::Submitted => html! {
                        <div class="lead-confirmation">
                            <div class="badge">{"✓"}</div>
                            <h4>{"Message Sent!"}</h4>
                            <p>{"Thanks for being a part of the ethical tech movement. We'll be in touch soon."}</p>
                            <button type="button" class="send-another" onclick={send_another}>
                                {"Send another idea"}
                            </button>
                        </div>
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    async fn render_state(state: FormState) -> String {
        render::<LeadFormView>(LeadFormViewProps {
            state,
            on_event: Callback::from(|_: FormEvent| ()),
        })
        .await
    }

    #[tokio::test]
    async fn editing_view_has_three_empty_required_fields() {
        let html = render_state(FormState::Editing).await;

        assert_eq!(html.matches(r#"required="required""#).count(), 3);
        for id in ["lead-name", "lead-project", "lead-vision"] {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing #{}", id);
        }
        assert!(!html.contains("value="));
        assert!(html.contains("></textarea>"));
        assert!(!html.contains("Send another idea"));
    }

    #[tokio::test]
    async fn submitted_view_replaces_the_form_with_a_confirmation() {
        let html = render_state(FormState::Submitted).await;

        assert!(html.contains("Message Sent!"));
        assert!(html.contains("Send another idea"));
        assert!(!html.contains("<form"));
        assert!(!html.contains("<input"));
    }

    #[tokio::test]
    async fn sending_another_renders_the_same_blank_form_as_first_load() {
        let first = render_state(FormState::default()).await;
        let again = FormState::default()
            .on(FormEvent::Submit)
            .on(FormEvent::SendAnother);

        assert_eq!(render_state(again).await, first);
    }
}
